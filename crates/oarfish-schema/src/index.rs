//! Vector index descriptors and the pending-index registry

use indexmap::IndexMap;
use oarfish_core::{OarfishError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index algorithms the server can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexAlgorithm {
    /// Hierarchical navigable small world graph
    Hnsw,
    /// Inverted file with flat quantization
    IvfFlat,
}

impl IndexAlgorithm {
    /// The keyword rendered into the DDL `type=` entry.
    pub fn keyword(&self) -> &'static str {
        match self {
            IndexAlgorithm::Hnsw => "hnsw",
            IndexAlgorithm::IvfFlat => "ivfflat",
        }
    }
}

impl fmt::Display for IndexAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Default for IndexAlgorithm {
    fn default() -> Self {
        IndexAlgorithm::Hnsw
    }
}

impl FromStr for IndexAlgorithm {
    type Err = OarfishError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hnsw" => Ok(IndexAlgorithm::Hnsw),
            "ivfflat" => Ok(IndexAlgorithm::IvfFlat),
            other => Err(OarfishError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Describes one vector similarity index to be created.
///
/// A vector index targets exactly one column; constructing a descriptor
/// over any other number of columns fails. Extra parameters (distance
/// metric, backing library, ...) are kept in registration order so DDL
/// rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    index_name: String,
    field_name: String,
    algorithm: Option<IndexAlgorithm>,
    extras: IndexMap<String, String>,
}

impl IndexDescriptor {
    /// Build a descriptor over `columns`, which must name exactly one column.
    pub fn new(
        index_name: impl Into<String>,
        columns: &[&str],
        algorithm: Option<IndexAlgorithm>,
    ) -> Result<Self> {
        if columns.len() != 1 {
            return Err(OarfishError::ColumnCount(columns.len()));
        }
        Ok(Self {
            index_name: index_name.into(),
            field_name: columns[0].to_string(),
            algorithm,
            extras: IndexMap::new(),
        })
    }

    /// Builder-style extra parameter. A repeated key overwrites the earlier
    /// value without moving its position.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn algorithm(&self) -> Option<IndexAlgorithm> {
        self.algorithm
    }

    /// Extra parameters in registration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extras.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A caller-side registry of pending index descriptors, keyed by
/// `(field_name, index_name)`.
///
/// Registering the same key again replaces the earlier descriptor in place
/// (last write wins, original position kept), which makes "rebuild by
/// re-add" cheap. A column may carry several indexes under different names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexParams {
    entries: IndexMap<(String, String), IndexDescriptor>,
}

impl IndexParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and store a descriptor for `field_name` under `index_name`.
    pub fn register<K, V>(
        &mut self,
        field_name: &str,
        algorithm: IndexAlgorithm,
        index_name: &str,
        extras: impl IntoIterator<Item = (K, V)>,
    ) -> Result<()>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut descriptor = IndexDescriptor::new(index_name, &[field_name], Some(algorithm))?;
        for (key, value) in extras {
            descriptor = descriptor.with_param(key, value);
        }
        self.add(descriptor);
        Ok(())
    }

    /// Store a prebuilt descriptor under its `(field, index)` key.
    pub fn add(&mut self, descriptor: IndexDescriptor) {
        let key = (
            descriptor.field_name().to_string(),
            descriptor.index_name().to_string(),
        );
        self.entries.insert(key, descriptor);
    }

    /// Descriptors in first-insertion order of their keys.
    pub fn iter(&self) -> impl Iterator<Item = &IndexDescriptor> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a IndexParams {
    type Item = &'a IndexDescriptor;
    type IntoIter = indexmap::map::Values<'a, (String, String), IndexDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
