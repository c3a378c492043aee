use thiserror::Error;

#[derive(Error, Debug)]
pub enum OarfishError {
    #[error("expected a one-dimensional numeric sequence: {0}")]
    Shape(String),

    #[error("expected {expected} dimensions, not {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("codec error: {0}")]
    Codec(String),

    #[error("expected single column for vector index, got {0}")]
    ColumnCount(usize),

    #[error("unsupported vector index algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("identifier error: {0}")]
    Identifier(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("execution error: {0}")]
    Execution(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OarfishError>;

// Custom Error Types:
//
// Executor implementations wrapping a concrete driver can surface driver
// errors through `OarfishError::Execution`, or convert any error that
// implements `std::error::Error + Send + Sync + 'static` via the
// `#[from] anyhow::Error` variant.
