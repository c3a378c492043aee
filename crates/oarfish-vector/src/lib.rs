//! Vector value codec and vector column type
//!
//! Converts between in-memory `f32` sequences and the two wire forms the
//! database understands (a bracketed text literal and a JSON-bytes payload),
//! and models a vector-typed table column with an optional declared
//! dimension.
//!
//! # Example
//!
//! ```
//! use oarfish_core::SqlValue;
//! use oarfish_vector::{decode_from_storage, Vector, VectorColumn};
//!
//! # fn main() -> oarfish_core::Result<()> {
//! let col = VectorColumn::with_dim(3);
//! let literal = col.bind(Some(&Vector::new(vec![0.5, 1.5, 2.5])))?;
//! assert_eq!(literal.as_deref(), Some("[0.5,1.5,2.5]"));
//!
//! let stored = SqlValue::Text("[0.5,1.5,2.5]".to_string());
//! let decoded = decode_from_storage(&stored)?.unwrap();
//! assert_eq!(decoded.as_slice(), &[0.5, 1.5, 2.5]);
//! # Ok(())
//! # }
//! ```

pub mod column;
pub mod vector;

pub use column::VectorColumn;
pub use vector::{decode_from_storage, encode_for_storage, Vector};
