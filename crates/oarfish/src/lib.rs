//! Client library for a SQL-speaking vector database
//!
//! Oarfish lets application code declare tables with vector-typed columns,
//! register vector similarity indexes, and run nearest-neighbor queries.
//! It produces the exact DDL/DML text the server parses and converts
//! between in-memory `f32` vectors and the database's wire encodings;
//! statement execution is delegated to an [`Executor`] implementation.
//!
//! # Example
//!
//! ```
//! use oarfish::prelude::*;
//!
//! # fn main() -> oarfish::Result<()> {
//! let table = TableDef::new("t1")
//!     .column(ColumnDef::new("c1", ColumnType::Integer).primary_key())
//!     .column(ColumnDef::new("c2", ColumnType::Vector(Some(3))));
//!
//! let mut indexes = IndexParams::new();
//! indexes.register(
//!     "c2",
//!     IndexAlgorithm::Hnsw,
//!     "idx1",
//!     [("distance", "l2"), ("lib", "vsag")],
//! )?;
//!
//! let mut engine = MemoryExecutor::new();
//! let mut client = Client::new(&mut engine);
//! client.create_table_with_indexes(&table, &indexes)?;
//!
//! client.insert(
//!     &table,
//!     &Row::new().with("c1", 1i64).with("c2", vec![0.1f32, 0.2, 0.3]),
//! )?;
//!
//! let search = AnnSearch::new(&table, "c2")?.limit(10);
//! let hits = client.ann_search(&search, &Vector::new(vec![0.1, 0.2, 0.3]))?;
//! # let _ = hits;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod executor;
pub mod prelude;
pub mod statement;

pub use client::{AnnSearch, Client, ClientConfig};
pub use executor::{Executor, MemoryExecutor};
pub use oarfish_core::{OarfishError, Result, Row, SqlValue};
pub use oarfish_schema::{
    ColumnDef, ColumnType, DistanceFn, IndexAlgorithm, IndexDescriptor, IndexParams, TableDef,
};
pub use oarfish_vector::{Vector, VectorColumn};
pub use statement::SearchKind;
