//! Error types for rxdlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a dump
#[derive(Error, Debug)]
pub enum RxdError {
    /// Column count outside the allowed range
    #[error("invalid column count {0}: must be between 1 and 256")]
    InvalidColumns(usize),

    /// Group size outside the allowed range
    #[error("invalid group size {got}: must be between 1 and the column count ({cols})")]
    InvalidGroupSize { got: usize, cols: usize },

    /// Failed to read the input source
    #[error("failed to read '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
