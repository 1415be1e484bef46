//! # gridport-core
//!
//! Core data structures for the gridport delimited-text engine.
//!
//! This crate provides the fundamental types used throughout gridport:
//! - [`CellValue`] - Typed cell values (text, full-precision numbers, calendar
//!   dates, booleans, spreadsheet error codes)
//! - [`Grid`] - A rectangular grid of cell values
//!
//! Cell values carry their own canonical textual form via [`std::fmt::Display`]:
//! numbers print every significant digit, dates print as ISO `YYYY-MM-DD`, and
//! [`CellValue::parse_canonical`] reverses those forms.
//!
//! ## Example
//!
//! ```rust
//! use gridport_core::{CellValue, Grid};
//!
//! let mut grid = Grid::new();
//! grid.push_row(vec![CellValue::from("Hello"), CellValue::from(42)]);
//! grid.push_row(vec![CellValue::Boolean(true)]);
//!
//! // Rows are kept rectangular; the short row was padded.
//! assert_eq!(grid.column_count(), 2);
//! assert_eq!(grid.get(1, 1).unwrap(), &CellValue::Empty);
//! ```

pub mod error;
pub mod grid;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use grid::Grid;
pub use value::{CellError, CellValue};
