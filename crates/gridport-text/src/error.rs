//! Delimited text error types

use thiserror::Error;

use crate::escape::MalformedEscape;

/// Result type for delimited text operations
pub type TextResult<T> = std::result::Result<T, TextError>;

/// Errors that can occur while reading or writing delimited documents
#[derive(Debug, Error)]
pub enum TextError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 byte sequence at offset {offset}")]
    InvalidEncoding {
        /// Byte offset of the first invalid byte in the source stream
        offset: usize,
    },

    /// Escape marker not followed by a recognized designator
    #[error("Malformed escape at row {row}, field {field}: {escape}")]
    MalformedEscape {
        /// 1-based row of the offending field
        row: usize,
        /// 1-based field index within the row
        field: usize,
        /// Details of the malformed sequence
        escape: MalformedEscape,
    },
}
