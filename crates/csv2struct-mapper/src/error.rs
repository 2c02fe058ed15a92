//! Error types for the mapping pipeline.

use thiserror::Error;

/// Errors from the sampling, assembly and emission stages.
///
/// Clean end-of-stream while sampling is not an error; it yields empty
/// header or value sequences instead.
#[derive(Debug, Error)]
pub enum MapperError {
    /// The underlying stream failed mid-record (malformed data or I/O).
    #[error("couldn't read csv record: {0}")]
    Read(#[from] csv::Error),
    /// Header-derived and value-derived column counts are irreconcilable.
    #[error("got {names} normalized headers and {types} inferred types, not matching")]
    ColumnCountMismatch { names: usize, types: usize },
    /// The emission buffer rejected a write; internal fault, surfaced verbatim.
    #[error("couldn't render record type: {0}")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;
