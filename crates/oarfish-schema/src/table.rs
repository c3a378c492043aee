//! Table and column descriptors

use oarfish_core::{validate_identifier, Result};
use oarfish_vector::VectorColumn;
use serde::{Deserialize, Serialize};

/// Column types the client can declare (MySQL-dialect keywords).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    BigInt,
    Double,
    Varchar(usize),
    Text,
    /// Vector column with an optional declared dimension.
    Vector(Option<usize>),
}

impl ColumnType {
    /// The type text emitted by CREATE TABLE for this column.
    pub fn col_spec(&self) -> String {
        match self {
            ColumnType::Integer => "INT".to_string(),
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Double => "DOUBLE".to_string(),
            ColumnType::Varchar(len) => format!("VARCHAR({})", len),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Vector(dim) => VectorColumn::new(*dim).col_spec(),
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, ColumnType::Vector(_))
    }
}

/// One column declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    name: String,
    column_type: ColumnType,
    primary_key: bool,
    nullable: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            nullable: true,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// For a vector column, the declared dimension constraint.
    pub fn vector_dim(&self) -> Option<Option<usize>> {
        match self.column_type {
            ColumnType::Vector(dim) => Some(dim),
            _ => None,
        }
    }

    fn render(&self) -> String {
        let mut out = format!("{} {}", self.name, self.column_type.col_spec());
        if self.primary_key {
            out.push_str(" PRIMARY KEY");
        } else if !self.nullable {
            out.push_str(" NOT NULL");
        }
        out
    }
}

/// A logical table: name plus column declarations.
///
/// # Example
///
/// ```
/// use oarfish_schema::{ColumnDef, ColumnType, TableDef};
///
/// let table = TableDef::new("t1")
///     .column(ColumnDef::new("c1", ColumnType::Integer).primary_key())
///     .column(ColumnDef::new("c2", ColumnType::Vector(Some(3))));
///
/// assert_eq!(
///     table.render_create_table().unwrap(),
///     "CREATE TABLE t1 (c1 INT PRIMARY KEY, c2 VECTOR(3))"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column_named(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Render the CREATE TABLE statement, validating every identifier.
    pub fn render_create_table(&self) -> Result<String> {
        validate_identifier(&self.name, "table")?;
        let mut parts = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            validate_identifier(column.name(), "column")?;
            parts.push(column.render());
        }
        Ok(format!("CREATE TABLE {} ({})", self.name, parts.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_specs() {
        assert_eq!(ColumnType::Integer.col_spec(), "INT");
        assert_eq!(ColumnType::Varchar(64).col_spec(), "VARCHAR(64)");
        assert_eq!(ColumnType::Vector(None).col_spec(), "VECTOR");
        assert_eq!(ColumnType::Vector(Some(3)).col_spec(), "VECTOR(3)");
    }

    #[test]
    fn test_render_create_table() {
        let table = TableDef::new("items")
            .column(ColumnDef::new("id", ColumnType::BigInt).primary_key())
            .column(ColumnDef::new("title", ColumnType::Varchar(128)).not_null())
            .column(ColumnDef::new("embedding", ColumnType::Vector(Some(384))));

        assert_eq!(
            table.render_create_table().unwrap(),
            "CREATE TABLE items (id BIGINT PRIMARY KEY, title VARCHAR(128) NOT NULL, \
             embedding VECTOR(384))"
        );
    }

    #[test]
    fn test_render_rejects_bad_identifiers() {
        let table = TableDef::new("t; DROP TABLE x")
            .column(ColumnDef::new("c1", ColumnType::Integer));
        assert!(table.render_create_table().is_err());

        let table = TableDef::new("t1").column(ColumnDef::new("c1; --", ColumnType::Integer));
        assert!(table.render_create_table().is_err());
    }

    #[test]
    fn test_column_lookup() {
        let table = TableDef::new("t1")
            .column(ColumnDef::new("c1", ColumnType::Integer))
            .column(ColumnDef::new("c2", ColumnType::Vector(Some(3))));

        assert!(table.column_named("c1").is_some());
        assert!(table.column_named("missing").is_none());
        assert_eq!(table.column_named("c2").unwrap().vector_dim(), Some(Some(3)));
    }
}
