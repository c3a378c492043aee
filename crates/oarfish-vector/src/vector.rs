//! Vector value and wire codecs
//!
//! The database understands two wire forms for a vector value:
//!
//! - a text literal, `[` + comma-joined decimals + `]`, no spaces
//! - a binary payload holding a UTF-8 JSON array of numbers
//!
//! Text elements are rendered from the `f64` widening of each `f32`
//! element, which is the exact grammar the server parses. Parsing the text
//! back and narrowing to `f32` recovers every element exactly.

use oarfish_core::{OarfishError, Result, SqlValue};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// An immutable, fixed-width sequence of `f32` elements.
///
/// Created per value at encode time (from application data) or per row at
/// decode time (from a result set); never mutated after construction.
///
/// # Example
///
/// ```
/// use oarfish_vector::Vector;
///
/// let v = Vector::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(v.dim(), 3);
/// assert_eq!(v.to_text(), "[1,2,3]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Number of elements.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }

    /// Build a vector from a JSON value, which must be a flat numeric array.
    ///
    /// Nested arrays and non-numeric elements are rejected: a vector is
    /// one-dimensional by definition.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| OarfishError::Shape(format!("expected an array, got {}", value)))?;
        let mut data = Vec::with_capacity(items.len());
        for item in items {
            let n = item.as_f64().ok_or_else(|| {
                OarfishError::Shape(format!("expected a numeric element, got {}", item))
            })?;
            data.push(n as f32);
        }
        Ok(Self::new(data))
    }

    /// Render the canonical text literal: `[f,f,...,f]`, no spaces.
    ///
    /// Each element is formatted as its `f64` widening, which is what the
    /// server-side grammar expects.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.data.len() * 8 + 2);
        out.push('[');
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}", f64::from(*v));
        }
        out.push(']');
        out
    }

    /// Parse the bracketed text literal.
    pub fn from_text(text: &str) -> Result<Self> {
        let inner = text
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| {
                OarfishError::Codec(format!("malformed vector literal: {:?}", text))
            })?;
        if inner.trim().is_empty() {
            return Ok(Self::new(Vec::new()));
        }
        let mut data = Vec::new();
        for token in inner.split(',') {
            let v: f64 = token.trim().parse().map_err(|_| {
                OarfishError::Codec(format!("invalid vector element: {:?}", token))
            })?;
            data.push(v as f32);
        }
        Ok(Self::new(data))
    }

    /// Parse the binary wire form: a UTF-8 JSON array of numbers.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| OarfishError::Codec(format!("invalid vector payload: {}", e)))?;
        Self::from_json_value(&value)
            .map_err(|e| OarfishError::Codec(format!("invalid vector payload: {}", e)))
    }

    /// Serialize to raw bytes, big-endian `f32` per element.
    ///
    /// Big-endian is the canonical byte-order convention for vector blobs.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|f| f.to_be_bytes()).collect()
    }

    /// Deserialize from raw big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(OarfishError::Codec(format!(
                "invalid blob length {} for f32 vector (must be multiple of 4)",
                bytes.len()
            )));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Ok(Self::new(data))
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

impl From<&[f32]> for Vector {
    fn from(data: &[f32]) -> Self {
        Self::new(data.to_vec())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data.into_iter().map(|v| v as f32).collect())
    }
}

/// Encode a vector for storage as the text wire form.
///
/// `None` passes through unchanged (nullable column semantics). When the
/// column declares a dimension, a vector of any other width fails with
/// [`OarfishError::DimensionMismatch`] carrying both counts.
pub fn encode_for_storage(
    value: Option<&Vector>,
    declared_dim: Option<usize>,
) -> Result<Option<String>> {
    let Some(vector) = value else {
        return Ok(None);
    };
    if let Some(expected) = declared_dim {
        if vector.dim() != expected {
            return Err(OarfishError::DimensionMismatch {
                expected,
                actual: vector.dim(),
            });
        }
    }
    Ok(Some(vector.to_text()))
}

/// Decode a stored value back into a vector.
///
/// Dispatches on the value kind: `Null` decodes to `None`, an
/// already-decoded vector is returned unchanged, text parses the bracketed
/// literal, bytes parse the JSON payload. Any other kind fails with
/// [`OarfishError::Codec`] naming the unsupported source type.
pub fn decode_from_storage(raw: &SqlValue) -> Result<Option<Vector>> {
    match raw {
        SqlValue::Null => Ok(None),
        SqlValue::Vector(data) => Ok(Some(Vector::new(data.clone()))),
        SqlValue::Text(text) => Vector::from_text(text).map(Some),
        SqlValue::Bytes(bytes) => Vector::from_json_bytes(bytes).map(Some),
        other => Err(OarfishError::Codec(format!(
            "cannot decode a vector from a {} value",
            other.kind_name()
        ))),
    }
}
