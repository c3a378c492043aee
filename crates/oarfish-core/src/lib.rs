//! Core types shared by the oarfish client crates
//!
//! Provides the crate-wide error type, the row/value model returned by
//! executors, and SQL identifier validation.

pub mod error;
pub mod ident;
pub mod value;

pub use error::{OarfishError, Result};
pub use ident::validate_identifier;
pub use value::{Row, SqlValue};
