//! Vendor DDL rendering
//!
//! The vector index grammar is:
//!
//! ```text
//! CREATE VECTOR INDEX <name> (<column>) ON <table> [WITH (<k>=<v>,...,type=<algo>)]
//! ```
//!
//! Extra parameters render in registration order, comma-separated with no
//! spaces; the `type=` entry is always the last WITH entry. When the
//! descriptor carries neither extras nor an algorithm, the WITH clause is
//! omitted entirely.

use crate::index::IndexDescriptor;
use oarfish_core::{validate_identifier, Result};

/// Render the CREATE VECTOR INDEX statement for one descriptor.
pub fn render_create_vector_index(descriptor: &IndexDescriptor, table_name: &str) -> Result<String> {
    validate_identifier(table_name, "table")?;
    validate_identifier(descriptor.index_name(), "index")?;
    validate_identifier(descriptor.field_name(), "column")?;

    let mut entries: Vec<String> = descriptor
        .params()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if let Some(algorithm) = descriptor.algorithm() {
        entries.push(format!("type={}", algorithm.keyword()));
    }

    let stmt = if entries.is_empty() {
        format!(
            "CREATE VECTOR INDEX {} ({}) ON {}",
            descriptor.index_name(),
            descriptor.field_name(),
            table_name
        )
    } else {
        format!(
            "CREATE VECTOR INDEX {} ({}) ON {} WITH ({})",
            descriptor.index_name(),
            descriptor.field_name(),
            table_name,
            entries.join(",")
        )
    };
    Ok(stmt)
}

/// Render an ordinary (non-vector) CREATE INDEX statement.
pub fn render_create_index(index_name: &str, table_name: &str, columns: &[&str]) -> Result<String> {
    validate_identifier(index_name, "index")?;
    validate_identifier(table_name, "table")?;
    for column in columns {
        validate_identifier(column, "column")?;
    }
    Ok(format!(
        "CREATE INDEX {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    ))
}
