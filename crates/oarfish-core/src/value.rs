//! Row value model
//!
//! `SqlValue` is the typed value a result row cell or a bound parameter can
//! hold; `Row` is an ordered mapping of column name to value, which is how
//! executors return result sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single SQL value as seen on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// An already-decoded vector. Decoding a value of this kind is a no-op.
    Vector(Vec<f32>),
}

impl SqlValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Float(_) => "float",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Vector(_) => "vector",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<f32>> for SqlValue {
    fn from(v: Vec<f32>) -> Self {
        SqlValue::Vector(v)
    }
}

/// One result or input row: column name to value, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, SqlValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, replacing any previous value for the same column.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SqlValue>) {
        self.columns.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, SqlValue)>>(iter: T) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_preserves_column_order() {
        let row = Row::new()
            .with("c1", 1i64)
            .with("c3", "x")
            .with("c2", 2.5f64);

        let names: Vec<&str> = row.columns().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["c1", "c3", "c2"]);
    }

    #[test]
    fn test_row_insert_replaces() {
        let mut row = Row::new();
        row.insert("c1", 1i64);
        row.insert("c1", 2i64);

        assert_eq!(row.len(), 1);
        assert_eq!(row.get("c1"), Some(&SqlValue::Integer(2)));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SqlValue::Null.kind_name(), "null");
        assert_eq!(SqlValue::Vector(vec![1.0]).kind_name(), "vector");
        assert_eq!(SqlValue::Bytes(vec![1]).kind_name(), "bytes");
    }
}
