//! Error types for gridport-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridport-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (columns: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
