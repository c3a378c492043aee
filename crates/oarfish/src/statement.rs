//! DML statement building and result decoding
//!
//! Vector values bound to an INSERT go through the codec with the column's
//! declared-dimension check; vector values coming back from a SELECT are
//! decoded from whichever wire form the server returned.

use oarfish_core::{validate_identifier, OarfishError, Result, Row, SqlValue};
use oarfish_schema::{ColumnType, DistanceFn, TableDef};
use oarfish_vector::{decode_from_storage, encode_for_storage, Vector};
use serde::{Deserialize, Serialize};

/// Whether the ORDER BY asks the server for approximate or exact ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchKind {
    /// Let the vector index answer, trading recall for speed.
    #[default]
    Approximate,
    /// Exact scan; same statement without the APPROXIMATE keyword.
    Exact,
}

fn quote_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn hex_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push_str("X'");
    for b in bytes {
        out.push_str(&format!("{:02X}", b));
    }
    out.push('\'');
    out
}

/// Render one value as a SQL literal. Vector values render as the quoted
/// text wire form.
fn render_literal(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Integer(v) => v.to_string(),
        SqlValue::Float(v) => v.to_string(),
        SqlValue::Text(v) => quote_str(v),
        SqlValue::Bytes(v) => hex_literal(v),
        SqlValue::Vector(data) => quote_str(&Vector::new(data.clone()).to_text()),
    }
}

/// Render an INSERT for one row, encoding vector columns through the codec.
///
/// Every row column must exist in the table definition; a vector column
/// with a declared dimension rejects vectors of any other width.
pub fn render_insert(table: &TableDef, row: &Row) -> Result<String> {
    validate_identifier(table.name(), "table")?;
    let mut names = Vec::with_capacity(row.len());
    let mut values = Vec::with_capacity(row.len());

    for (name, value) in row.columns() {
        let column = table.column_named(name).ok_or_else(|| {
            OarfishError::NotFound(format!("column {} in table {}", name, table.name()))
        })?;
        validate_identifier(name, "column")?;

        let literal = match (column.column_type(), value) {
            (ColumnType::Vector(dim), SqlValue::Vector(data)) => {
                let vector = Vector::new(data.clone());
                // encode_for_storage(Some(..)) always yields Some text
                let text = encode_for_storage(Some(&vector), dim)?
                    .unwrap_or_default();
                quote_str(&text)
            }
            (ColumnType::Vector(_), SqlValue::Null) => "NULL".to_string(),
            (ColumnType::Vector(_), other) => {
                return Err(OarfishError::Codec(format!(
                    "cannot bind a {} value to vector column {}",
                    other.kind_name(),
                    name
                )));
            }
            (_, value) => render_literal(value),
        };

        names.push(name.to_string());
        values.push(literal);
    }

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name(),
        names.join(", "),
        values.join(", ")
    ))
}

/// Render a nearest-neighbor SELECT.
///
/// The query vector is bound as a text literal inside the distance call;
/// output columns default to `*` when none are named. The distance
/// expression is also selected as `distance`.
pub fn render_ann_search(
    table: &TableDef,
    vector_column: &str,
    query: &Vector,
    distance: DistanceFn,
    kind: SearchKind,
    limit: usize,
    output_columns: &[&str],
) -> Result<String> {
    validate_identifier(table.name(), "table")?;
    validate_identifier(vector_column, "column")?;

    let column = table.column_named(vector_column).ok_or_else(|| {
        OarfishError::NotFound(format!(
            "column {} in table {}",
            vector_column,
            table.name()
        ))
    })?;
    let dim = column.vector_dim().ok_or_else(|| {
        OarfishError::Codec(format!("column {} is not a vector column", vector_column))
    })?;

    let query_literal = quote_str(
        &encode_for_storage(Some(query), dim)?.unwrap_or_default(),
    );
    let distance_expr = distance.render_call(&[vector_column, &query_literal]);

    let mut select_items: Vec<String> = Vec::new();
    if output_columns.is_empty() {
        select_items.push("*".to_string());
    } else {
        for name in output_columns {
            validate_identifier(name, "column")?;
            select_items.push(name.to_string());
        }
    }
    select_items.push(format!("{} AS distance", distance_expr));

    let approximate = match kind {
        SearchKind::Approximate => " APPROXIMATE",
        SearchKind::Exact => "",
    };

    Ok(format!(
        "SELECT {} FROM {} ORDER BY {}{} LIMIT {}",
        select_items.join(", "),
        table.name(),
        distance_expr,
        approximate,
        limit
    ))
}

/// Decode the vector columns of result rows in place.
///
/// Non-vector columns pass through untouched; vector columns are decoded
/// from whichever wire form the server returned.
pub fn decode_rows(table: &TableDef, rows: Vec<Row>) -> Result<Vec<Row>> {
    rows.into_iter()
        .map(|row| {
            row.columns()
                .map(|(name, value)| {
                    let decoded = match table.column_named(name) {
                        Some(column) if column.column_type().is_vector() => {
                            match decode_from_storage(value)? {
                                Some(vector) => SqlValue::Vector(vector.into_inner()),
                                None => SqlValue::Null,
                            }
                        }
                        _ => value.clone(),
                    };
                    Ok((name.to_string(), decoded))
                })
                .collect::<Result<Row>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oarfish_schema::{ColumnDef, ColumnType};

    fn table() -> TableDef {
        TableDef::new("t1")
            .column(ColumnDef::new("c1", ColumnType::Integer).primary_key())
            .column(ColumnDef::new("c2", ColumnType::Vector(Some(3))))
            .column(ColumnDef::new("note", ColumnType::Text))
    }

    #[test]
    fn test_render_insert() {
        let row = Row::new()
            .with("c1", 7i64)
            .with("c2", vec![1.0f32, 2.0, 3.0])
            .with("note", "it's fine");

        assert_eq!(
            render_insert(&table(), &row).unwrap(),
            "INSERT INTO t1 (c1, c2, note) VALUES (7, '[1,2,3]', 'it''s fine')"
        );
    }

    #[test]
    fn test_render_insert_checks_dimension() {
        let row = Row::new().with("c2", vec![1.0f32, 2.0]);
        let err = render_insert(&table(), &row).unwrap_err();
        assert!(matches!(
            err,
            OarfishError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_render_insert_null_vector() {
        let row = Row::new().with("c1", 1i64).with("c2", SqlValue::Null);
        assert_eq!(
            render_insert(&table(), &row).unwrap(),
            "INSERT INTO t1 (c1, c2) VALUES (1, NULL)"
        );
    }

    #[test]
    fn test_render_insert_unknown_column() {
        let row = Row::new().with("missing", 1i64);
        assert!(matches!(
            render_insert(&table(), &row),
            Err(OarfishError::NotFound(_))
        ));
    }

    #[test]
    fn test_render_insert_rejects_text_for_vector() {
        let row = Row::new().with("c2", "[1,2,3]");
        assert!(matches!(
            render_insert(&table(), &row),
            Err(OarfishError::Codec(_))
        ));
    }

    #[test]
    fn test_render_ann_search() {
        let query = Vector::new(vec![1.0, 2.0, 3.0]);
        let sql = render_ann_search(
            &table(),
            "c2",
            &query,
            DistanceFn::L2Distance,
            SearchKind::Approximate,
            10,
            &["c1"],
        )
        .unwrap();

        assert_eq!(
            sql,
            "SELECT c1, l2_distance(c2, '[1,2,3]') AS distance FROM t1 \
             ORDER BY l2_distance(c2, '[1,2,3]') APPROXIMATE LIMIT 10"
        );
    }

    #[test]
    fn test_render_ann_search_exact_star() {
        let query = Vector::new(vec![1.0, 2.0, 3.0]);
        let sql = render_ann_search(
            &table(),
            "c2",
            &query,
            DistanceFn::CosineDistance,
            SearchKind::Exact,
            5,
            &[],
        )
        .unwrap();

        assert_eq!(
            sql,
            "SELECT *, cosine_distance(c2, '[1,2,3]') AS distance FROM t1 \
             ORDER BY cosine_distance(c2, '[1,2,3]') LIMIT 5"
        );
    }

    #[test]
    fn test_render_ann_search_rejects_non_vector_column() {
        let query = Vector::new(vec![1.0]);
        assert!(render_ann_search(
            &table(),
            "note",
            &query,
            DistanceFn::L2Distance,
            SearchKind::Approximate,
            10,
            &[],
        )
        .is_err());
    }

    #[test]
    fn test_decode_rows() {
        let rows = vec![Row::new()
            .with("c1", 1i64)
            .with("c2", SqlValue::Text("[1.0,2.0,3.0]".into()))
            .with("distance", 0.5f64)];

        let decoded = decode_rows(&table(), rows).unwrap();
        assert_eq!(
            decoded[0].get("c2"),
            Some(&SqlValue::Vector(vec![1.0, 2.0, 3.0]))
        );
        assert_eq!(decoded[0].get("c1"), Some(&SqlValue::Integer(1)));
    }
}
