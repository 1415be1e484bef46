//! Delimited document writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::TextResult;
use crate::escape::escape;
use crate::options::{LineTerminator, WriteOptions};
use gridport_core::Grid;

/// Delimited document writer
///
/// Each cell is formatted to its canonical text, escaped, and joined with
/// the mode's delimiter; every row, including the last, ends with the
/// configured terminator. Output is UTF-8 and never starts with a
/// byte-order mark.
pub struct DocumentWriter;

impl DocumentWriter {
    /// Write a grid to a file, replacing any existing content
    ///
    /// There is no partial-write recovery: on failure the destination is
    /// left truncated or half-written and must be discarded by the caller.
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &WriteOptions,
    ) -> TextResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to a writer
    pub fn write<W: Write>(grid: &Grid, writer: W, options: &WriteOptions) -> TextResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        // The escape codec keeps line breaks (and tab-mode tabs) out of
        // fields, so records are never quote-wrapped. An embedded comma in
        // CSV mode stays raw; that divergence from RFC 4180 is part of the
        // format.
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.mode.delimiter_byte())
            .terminator(terminator)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        // A zero-column grid has no representable rows in a delimited
        // stream.
        if grid.column_count() == 0 {
            csv_writer.flush()?;
            return Ok(());
        }

        for row in grid.rows() {
            let record: Vec<String> = row
                .iter()
                .map(|value| escape(&value.to_string(), options.mode))
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DelimiterMode;
    use gridport_core::CellValue;
    use pretty_assertions::assert_eq;

    fn write_to_string(grid: &Grid, options: &WriteOptions) -> String {
        let mut buf = Vec::new();
        DocumentWriter::write(grid, &mut buf, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_csv_lf() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::from("a"), CellValue::from(1)],
            vec![CellValue::from("b"), CellValue::Empty],
        ]);
        let options = WriteOptions {
            mode: DelimiterMode::Csv,
            line_terminator: LineTerminator::LF,
        };
        assert_eq!(write_to_string(&grid, &options), "a,1\nb,\n");
    }

    #[test]
    fn test_write_crlf_terminates_every_row() {
        let grid = Grid::from_rows(vec![vec![CellValue::from("x")]]);
        assert_eq!(write_to_string(&grid, &WriteOptions::default()), "x\r\n");
    }

    #[test]
    fn test_write_tab_mode_escapes_tabs() {
        let grid = Grid::from_rows(vec![vec![
            CellValue::from("a\tb"),
            CellValue::from("c\nd"),
        ]]);
        let options = WriteOptions {
            mode: DelimiterMode::Tab,
            line_terminator: LineTerminator::LF,
        };
        assert_eq!(write_to_string(&grid, &options), "a\\~tb\tc\\~nd\n");
    }

    #[test]
    fn test_write_never_emits_bom() {
        let grid = Grid::from_rows(vec![vec![CellValue::from("data")]]);
        let mut buf = Vec::new();
        DocumentWriter::write(&grid, &mut buf, &WriteOptions::default()).unwrap();
        assert!(!buf.starts_with(&[0xEF, 0xBB, 0xBF]));
    }

    #[test]
    fn test_write_empty_grid() {
        assert_eq!(write_to_string(&Grid::new(), &WriteOptions::default()), "");
    }

    #[test]
    fn test_write_file_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content that is much longer than the export").unwrap();

        let grid = Grid::from_rows(vec![vec![CellValue::from("fresh")]]);
        DocumentWriter::write_file(&grid, &path, &WriteOptions::default()).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"fresh\r\n");
    }
}
