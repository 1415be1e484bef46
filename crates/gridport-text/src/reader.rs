//! Delimited document reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{TextError, TextResult};
use crate::escape::unescape;
use crate::options::ReadOptions;
use gridport_core::{CellValue, Grid};

/// UTF-8 byte-order mark, tolerated at the start of input
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Delimited document reader
///
/// Input is decoded as UTF-8 unconditionally; there is no fallback to a
/// legacy code page, and invalid bytes abort the read.
pub struct DocumentReader;

impl DocumentReader {
    /// Read a delimited file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> TextResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a delimited document into a grid
    ///
    /// Fields are unescaped and, when [`ReadOptions::infer_types`] is set,
    /// parsed back into typed values. With inference off every non-empty
    /// field becomes a [`CellValue::Text`]; an empty field is always
    /// [`CellValue::Empty`].
    pub fn read<R: Read>(reader: R, options: &ReadOptions) -> TextResult<Grid> {
        let rows = Self::read_fields(reader, options)?;

        let mut grid = Grid::new();
        for row in rows {
            let cells = row
                .into_iter()
                .map(|field| {
                    if options.infer_types {
                        CellValue::parse_canonical(&field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field)
                    }
                })
                .collect();
            grid.push_row(cells);
        }
        Ok(grid)
    }

    /// Read a delimited document into rows of raw field strings
    ///
    /// Strips one leading UTF-8 byte-order mark if present, decodes the
    /// rest strictly as UTF-8, splits into lines on LF or CRLF, splits each
    /// line on the mode's delimiter, and reverses the field escaping.
    pub fn read_fields<R: Read>(
        mut reader: R,
        options: &ReadOptions,
    ) -> TextResult<Vec<Vec<String>>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::decode(&bytes, options)
    }

    fn decode(bytes: &[u8], options: &ReadOptions) -> TextResult<Vec<Vec<String>>> {
        let (bytes, bom_len) = match bytes.strip_prefix(&UTF8_BOM) {
            Some(rest) => {
                log::debug!("stripping UTF-8 byte-order mark from input");
                (rest, UTF8_BOM.len())
            }
            None => (bytes, 0),
        };

        let text = std::str::from_utf8(bytes).map_err(|e| TextError::InvalidEncoding {
            offset: bom_len + e.valid_up_to(),
        })?;

        let delimiter = options.mode.delimiter();
        let mut rows = Vec::new();
        for (row_idx, line) in split_lines(text).enumerate() {
            let mut row = Vec::new();
            for (field_idx, field) in line.split(delimiter).enumerate() {
                let unescaped =
                    unescape(field, options.mode).map_err(|escape| TextError::MalformedEscape {
                        row: row_idx + 1,
                        field: field_idx + 1,
                        escape,
                    })?;
                row.push(unescaped);
            }
            rows.push(row);
        }
        Ok(rows)
    }
}

/// Split on LF or CRLF. The trailing terminator of the last row does not
/// produce a phantom empty row; a final unterminated line is accepted.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DelimiterMode;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::io::Cursor;
    use std::str::FromStr;

    fn read_fields_str(input: &str, options: &ReadOptions) -> Vec<Vec<String>> {
        DocumentReader::read_fields(Cursor::new(input.as_bytes()), options).unwrap()
    }

    #[test]
    fn test_read_fields_lf_and_crlf() {
        let options = ReadOptions::default();
        assert_eq!(
            read_fields_str("a,b\r\nc,d\r\n", &options),
            vec![vec!["a", "b"], vec!["c", "d"]]
        );
        assert_eq!(
            read_fields_str("a,b\nc,d\n", &options),
            vec![vec!["a", "b"], vec!["c", "d"]]
        );
        // A final unterminated line is accepted.
        assert_eq!(read_fields_str("a,b\nc,d", &options), vec![
            vec!["a", "b"],
            vec!["c", "d"]
        ]);
    }

    #[test]
    fn test_read_unescapes_fields() {
        let options = ReadOptions::with_mode(DelimiterMode::Tab);
        assert_eq!(
            read_fields_str("a\\~r\\~nb\tc\\~td\n", &options),
            vec![vec!["a\r\nb", "c\td"]]
        );
    }

    #[test]
    fn test_read_strips_bom() {
        let options = ReadOptions::default();
        let with_bom = b"\xEF\xBB\xBFa,b\n";
        let rows = DocumentReader::read_fields(Cursor::new(&with_bom[..]), &options).unwrap();
        assert_eq!(rows, vec![vec!["a", "b"]]);
        // Identical to the same document without the mark.
        assert_eq!(rows, read_fields_str("a,b\n", &options));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let options = ReadOptions::default();
        let bytes = b"ok\n\xFF\xFE\n";
        let err = DocumentReader::read_fields(Cursor::new(&bytes[..]), &options).unwrap_err();
        assert!(matches!(err, TextError::InvalidEncoding { offset: 3 }));
    }

    #[test]
    fn test_invalid_utf8_offset_accounts_for_bom() {
        let options = ReadOptions::default();
        let bytes = b"\xEF\xBB\xBFok\xFF";
        let err = DocumentReader::read_fields(Cursor::new(&bytes[..]), &options).unwrap_err();
        assert!(matches!(err, TextError::InvalidEncoding { offset: 5 }));
    }

    #[test]
    fn test_read_rejects_malformed_escape() {
        let options = ReadOptions::default();
        let err = DocumentReader::read_fields(Cursor::new("ok\nx,\\~zy\n"), &options).unwrap_err();
        match err {
            TextError::MalformedEscape { row, field, escape } => {
                assert_eq!((row, field), (2, 2));
                assert_eq!(escape.found, Some('z'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_typed() {
        let options = ReadOptions::default();
        let grid =
            DocumentReader::read(Cursor::new("name,42.50,TRUE\n,2024-03-07,#N/A\n"), &options)
                .unwrap();

        assert_eq!(grid.get(0, 0).unwrap(), &CellValue::text("name"));
        assert_eq!(
            grid.get(0, 1).unwrap(),
            &CellValue::Number(Decimal::from_str("42.50").unwrap())
        );
        assert_eq!(grid.get(0, 2).unwrap(), &CellValue::Boolean(true));
        assert_eq!(grid.get(1, 0).unwrap(), &CellValue::Empty);
        assert!(matches!(grid.get(1, 1).unwrap(), CellValue::Date(_)));
        assert!(grid.get(1, 2).unwrap().is_error());
    }

    #[test]
    fn test_read_untyped_keeps_text() {
        let options = ReadOptions {
            infer_types: false,
            ..ReadOptions::default()
        };
        let grid = DocumentReader::read(Cursor::new("42,TRUE\n"), &options).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), &CellValue::text("42"));
        assert_eq!(grid.get(0, 1).unwrap(), &CellValue::text("TRUE"));
    }

    #[test]
    fn test_read_empty_document() {
        let rows = read_fields_str("", &ReadOptions::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_blank_line_is_a_row() {
        // A blank line is a legitimate one-field row (an empty cell), not
        // something to skip.
        let rows = read_fields_str("a\n\nb\n", &ReadOptions::default());
        assert_eq!(rows, vec![vec!["a"], vec![""], vec!["b"]]);
    }
}
