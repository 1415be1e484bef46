//! # gridport-text
//!
//! Lossless delimited-text (CSV/TSV) reader and writer for gridport.
//!
//! Unlike conventional CSV quoting, this format keeps every field on a
//! single physical line by escaping embedded line breaks (and tabs, in tab
//! mode) with the [`ESCAPE_MARKER`] token scheme. Numbers are written at
//! full precision, dates as ISO `YYYY-MM-DD`, and the byte stream is always
//! UTF-8 without a byte-order mark (a mark on input is tolerated and
//! stripped).
//!
//! In CSV mode an embedded comma is intentionally left raw, so the output
//! is not RFC-4180 compliant; callers that must interoperate with strict
//! CSV consumers should prefer [`DelimiterMode::Tab`].

mod reader;
mod writer;
mod escape;
mod options;
mod error;

pub use reader::DocumentReader;
pub use writer::DocumentWriter;
pub use escape::{escape, unescape, MalformedEscape, ESCAPE_MARKER};
pub use options::{DelimiterMode, LineTerminator, ReadOptions, WriteOptions};
pub use error::{TextError, TextResult};
