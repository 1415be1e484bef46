//! # gridport
//!
//! A library for lossless delimited-text (CSV/TSV) round-trips of
//! spreadsheet grids.
//!
//! Spreadsheet-native CSV export tends to destroy data: numbers get rounded
//! to a fixed digit count, dates are rewritten in locale formats, and
//! embedded line breaks tear rows apart. gridport writes numbers at full
//! decimal precision, dates as ISO `YYYY-MM-DD`, and replaces embedded line
//! breaks (and tab-mode tabs) with a reversible escape-marker scheme, so a
//! document written by [`DocumentWriter`] reads back through
//! [`DocumentReader`] as the same grid. Output is always UTF-8 without a
//! byte-order mark; input with one is accepted.
//!
//! Note that in CSV mode an embedded comma is deliberately left unescaped,
//! so the output is not RFC-4180 compliant; use [`DelimiterMode::Tab`] when
//! strict CSV interoperability matters.
//!
//! ## Example
//!
//! ```rust
//! use gridport::prelude::*;
//!
//! let mut grid = Grid::new();
//! grid.push_row(vec![
//!     CellValue::from("note"),
//!     CellValue::from("two\nlines"),
//! ]);
//!
//! // Write to any io::Write sink
//! let mut buf = Vec::new();
//! DocumentWriter::write(&grid, &mut buf, &WriteOptions::default()).unwrap();
//!
//! // Read back the identical grid
//! let back = DocumentReader::read(&buf[..], &ReadOptions::default()).unwrap();
//! assert_eq!(back, grid);
//! ```

pub mod prelude;

// Re-exports for convenience
pub use gridport_core::{CellError, CellValue, Error, Grid, Result};
pub use gridport_text::{
    escape, unescape, DelimiterMode, DocumentReader, DocumentWriter, LineTerminator,
    MalformedEscape, ReadOptions, TextError, TextResult, WriteOptions, ESCAPE_MARKER,
};
