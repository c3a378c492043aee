//! High-level client over an execution collaborator
//!
//! The client renders DDL/DML text and hands it to a borrowed [`Executor`].
//! With the check-first policy on (the default), create operations skip
//! targets that already exist and operations against a missing table fail
//! with [`OarfishError::NotFound`] instead of surfacing a server error.

use crate::executor::Executor;
use crate::statement::{self, SearchKind};
use oarfish_core::{OarfishError, Result, Row};
use oarfish_schema::{ddl, DistanceFn, IndexDescriptor, IndexParams, TableDef};
use oarfish_vector::Vector;
use serde::{Deserialize, Serialize};

/// Client behavior toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Consult the executor's existence checks before create operations
    /// and before DML against a table.
    pub check_first: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { check_first: true }
    }
}

/// A nearest-neighbor search over one vector column.
///
/// # Example
///
/// ```
/// use oarfish::prelude::*;
///
/// # fn main() -> oarfish::Result<()> {
/// let table = TableDef::new("docs")
///     .column(ColumnDef::new("id", ColumnType::BigInt).primary_key())
///     .column(ColumnDef::new("embedding", ColumnType::Vector(Some(3))));
///
/// let search = AnnSearch::new(&table, "embedding")?
///     .distance(DistanceFn::CosineDistance)
///     .limit(5)
///     .output(&["id"]);
///
/// let sql = search.render(&Vector::new(vec![0.1, 0.2, 0.3]))?;
/// assert!(sql.starts_with("SELECT id, cosine_distance(embedding,"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnnSearch<'t> {
    table: &'t TableDef,
    vector_column: String,
    distance: DistanceFn,
    kind: SearchKind,
    limit: usize,
    output: Vec<String>,
}

impl<'t> AnnSearch<'t> {
    /// Build a search over `vector_column`, which must be a vector column
    /// of `table`.
    pub fn new(table: &'t TableDef, vector_column: impl Into<String>) -> Result<Self> {
        let vector_column = vector_column.into();
        let column = table.column_named(&vector_column).ok_or_else(|| {
            OarfishError::NotFound(format!(
                "column {} in table {}",
                vector_column,
                table.name()
            ))
        })?;
        if column.vector_dim().is_none() {
            return Err(OarfishError::Codec(format!(
                "column {} is not a vector column",
                vector_column
            )));
        }
        Ok(Self {
            table,
            vector_column,
            distance: DistanceFn::default(),
            kind: SearchKind::default(),
            limit: 10,
            output: Vec::new(),
        })
    }

    /// Set the distance function. Default is L2.
    pub fn distance(mut self, distance: DistanceFn) -> Self {
        self.distance = distance;
        self
    }

    /// Ask for exact ordering instead of the approximate index scan.
    pub fn exact(mut self) -> Self {
        self.kind = SearchKind::Exact;
        self
    }

    /// Maximum number of results. Default is 10.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Columns to select; empty means `*`.
    pub fn output(mut self, columns: &[&str]) -> Self {
        self.output = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Render the SELECT for one query vector.
    pub fn render(&self, query: &Vector) -> Result<String> {
        let output: Vec<&str> = self.output.iter().map(String::as_str).collect();
        statement::render_ann_search(
            self.table,
            &self.vector_column,
            query,
            self.distance,
            self.kind,
            self.limit,
            &output,
        )
    }

    fn table(&self) -> &TableDef {
        self.table
    }
}

/// The oarfish client. Borrows the engine; owns nothing else.
pub struct Client<'a, E: Executor> {
    executor: &'a mut E,
    config: ClientConfig,
}

impl<'a, E: Executor> Client<'a, E> {
    pub fn new(executor: &'a mut E) -> Self {
        Self::with_config(executor, ClientConfig::default())
    }

    pub fn with_config(executor: &'a mut E, config: ClientConfig) -> Self {
        Self { executor, config }
    }

    /// Create a table; skipped (and logged) when it already exists and the
    /// check-first policy is on.
    pub fn create_table(&mut self, table: &TableDef) -> Result<()> {
        if self.config.check_first && self.executor.table_exists(table.name())? {
            tracing::debug!(table = table.name(), "table already exists, skipping");
            return Ok(());
        }
        let sql = table.render_create_table()?;
        self.executor.execute(&sql)?;
        tracing::info!(table = table.name(), "created table");
        Ok(())
    }

    /// Create a table and its pending vector indexes as one batch.
    pub fn create_table_with_indexes(
        &mut self,
        table: &TableDef,
        indexes: &IndexParams,
    ) -> Result<()> {
        self.create_table(table)?;
        for descriptor in indexes {
            self.create_vector_index(table.name(), descriptor)?;
        }
        Ok(())
    }

    /// Create one vector similarity index.
    ///
    /// Fails with [`OarfishError::NotFound`] when the table does not exist;
    /// an index that already exists is skipped under check-first.
    pub fn create_vector_index(
        &mut self,
        table_name: &str,
        descriptor: &IndexDescriptor,
    ) -> Result<()> {
        self.ensure_table(table_name)?;
        if self.config.check_first
            && self
                .executor
                .index_exists(table_name, descriptor.index_name())?
        {
            tracing::debug!(
                table = table_name,
                index = descriptor.index_name(),
                "index already exists, skipping"
            );
            return Ok(());
        }
        let sql = ddl::render_create_vector_index(descriptor, table_name)?;
        self.executor.execute(&sql)?;
        tracing::info!(
            table = table_name,
            index = descriptor.index_name(),
            "created vector index"
        );
        Ok(())
    }

    /// Create an ordinary (non-vector) index.
    pub fn create_index(
        &mut self,
        table_name: &str,
        index_name: &str,
        columns: &[&str],
    ) -> Result<()> {
        self.ensure_table(table_name)?;
        if self.config.check_first && self.executor.index_exists(table_name, index_name)? {
            tracing::debug!(
                table = table_name,
                index = index_name,
                "index already exists, skipping"
            );
            return Ok(());
        }
        let sql = ddl::render_create_index(index_name, table_name, columns)?;
        self.executor.execute(&sql)?;
        tracing::info!(table = table_name, index = index_name, "created index");
        Ok(())
    }

    /// Insert one row, encoding vector columns through the codec.
    pub fn insert(&mut self, table: &TableDef, row: &Row) -> Result<u64> {
        self.ensure_table(table.name())?;
        let sql = statement::render_insert(table, row)?;
        let affected = self.executor.execute(&sql)?;
        tracing::debug!(table = table.name(), "inserted row");
        Ok(affected)
    }

    /// Run a nearest-neighbor search and decode vector columns in the
    /// result rows.
    pub fn ann_search(&mut self, search: &AnnSearch<'_>, query: &Vector) -> Result<Vec<Row>> {
        self.ensure_table(search.table().name())?;
        let sql = search.render(query)?;
        let rows = self.executor.query(&sql)?;
        statement::decode_rows(search.table(), rows)
    }

    fn ensure_table(&mut self, name: &str) -> Result<()> {
        if self.config.check_first && !self.executor.table_exists(name)? {
            return Err(OarfishError::NotFound(format!("table {}", name)));
        }
        Ok(())
    }
}
