//! Prelude module - common imports for gridport users
//!
//! ```rust
//! use gridport::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellError,
    CellValue,

    // Options
    DelimiterMode,

    // I/O types
    DocumentReader,
    DocumentWriter,

    // Main types
    Grid,
    LineTerminator,
    ReadOptions,

    // Error types
    TextError,
    TextResult,
    WriteOptions,
};
