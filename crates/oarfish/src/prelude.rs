//! Oarfish Prelude
//!
//! Import this to get all commonly used types and traits:
//!
//! ```
//! use oarfish::prelude::*;
//! ```

// Core types
pub use oarfish_core::{OarfishError, Result, Row, SqlValue};

// Vector codec
pub use oarfish_vector::{decode_from_storage, encode_for_storage, Vector, VectorColumn};

// Schema model
pub use oarfish_schema::{
    ColumnDef, ColumnType, DistanceFn, IndexAlgorithm, IndexDescriptor, IndexParams, TableDef,
};

// Client
pub use crate::client::{AnnSearch, Client, ClientConfig};
pub use crate::executor::{Executor, MemoryExecutor};
pub use crate::statement::SearchKind;
