//! Vector column type

use crate::vector::{decode_from_storage, encode_for_storage, Vector};
use oarfish_core::{Result, SqlValue};
use serde::{Deserialize, Serialize};

/// A table column of vector type, with an optional declared dimension.
///
/// When a dimension is declared, every vector bound to the column must have
/// exactly that many elements; an absent dimension means "unconstrained".
///
/// # Example
///
/// ```
/// use oarfish_vector::{Vector, VectorColumn};
///
/// let col = VectorColumn::with_dim(3);
/// assert_eq!(col.col_spec(), "VECTOR(3)");
///
/// let bound = col.bind(Some(&Vector::new(vec![1.0, 2.0, 3.0]))).unwrap();
/// assert_eq!(bound.as_deref(), Some("[1,2,3]"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VectorColumn {
    dim: Option<usize>,
}

impl VectorColumn {
    pub fn new(dim: Option<usize>) -> Self {
        Self { dim }
    }

    /// Column constrained to exactly `dim` elements.
    pub fn with_dim(dim: usize) -> Self {
        Self { dim: Some(dim) }
    }

    /// Column accepting vectors of any width.
    pub fn unconstrained() -> Self {
        Self { dim: None }
    }

    pub fn dim(&self) -> Option<usize> {
        self.dim
    }

    /// The column type text emitted by table DDL: `VECTOR` or `VECTOR(<n>)`.
    pub fn col_spec(&self) -> String {
        match self.dim {
            None => "VECTOR".to_string(),
            Some(dim) => format!("VECTOR({})", dim),
        }
    }

    /// Encode a value bound to this column, enforcing the declared dimension.
    pub fn bind(&self, value: Option<&Vector>) -> Result<Option<String>> {
        encode_for_storage(value, self.dim)
    }

    /// Decode a result-set value read from this column.
    pub fn result(&self, raw: &SqlValue) -> Result<Option<Vector>> {
        decode_from_storage(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oarfish_core::OarfishError;

    #[test]
    fn test_col_spec() {
        assert_eq!(VectorColumn::unconstrained().col_spec(), "VECTOR");
        assert_eq!(VectorColumn::with_dim(384).col_spec(), "VECTOR(384)");
    }

    #[test]
    fn test_bind_enforces_dim() {
        let col = VectorColumn::with_dim(4);
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            col.bind(Some(&v)),
            Err(OarfishError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));

        let col = VectorColumn::unconstrained();
        assert_eq!(col.bind(Some(&v)).unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(col.bind(None).unwrap(), None);
    }

    #[test]
    fn test_result_decodes() {
        let col = VectorColumn::with_dim(2);
        let decoded = col.result(&SqlValue::Text("[1.5,2.5]".into())).unwrap();
        assert_eq!(decoded.unwrap().as_slice(), &[1.5, 2.5]);
        assert_eq!(col.result(&SqlValue::Null).unwrap(), None);
    }
}
