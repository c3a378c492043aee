//! Schema model for the oarfish client
//!
//! Declarative table/column descriptors, vector index descriptors with an
//! order-preserving parameter registry, and the vendor DDL rendering that
//! turns them into the exact statement text the server parses.
//!
//! # Example
//!
//! ```
//! use oarfish_schema::{ddl, IndexAlgorithm, IndexDescriptor};
//!
//! # fn main() -> oarfish_core::Result<()> {
//! let idx = IndexDescriptor::new("idx1", &["c2"], Some(IndexAlgorithm::Hnsw))?
//!     .with_param("distance", "l2")
//!     .with_param("lib", "vsag");
//!
//! assert_eq!(
//!     ddl::render_create_vector_index(&idx, "t1")?,
//!     "CREATE VECTOR INDEX idx1 (c2) ON t1 WITH (distance=l2,lib=vsag,type=hnsw)"
//! );
//! # Ok(())
//! # }
//! ```

pub mod ddl;
pub mod distance;
pub mod index;
pub mod table;

pub use ddl::{render_create_index, render_create_vector_index};
pub use distance::DistanceFn;
pub use index::{IndexAlgorithm, IndexDescriptor, IndexParams};
pub use table::{ColumnDef, ColumnType, TableDef};
