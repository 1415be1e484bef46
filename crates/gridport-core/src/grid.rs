//! Rectangular grid of cell values

use crate::error::{Error, Result};
use crate::value::CellValue;

/// A rectangular grid of cell values
///
/// Every row holds the same number of columns. Ragged input is repaired on
/// insertion: a short row is padded with [`CellValue::Empty`], and a row
/// wider than the grid widens every existing row. A grid is owned by a
/// single export or import operation; there is no shared document state.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
    columns: usize,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows, padding short rows with [`CellValue::Empty`]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut grid = Self::new();
        for row in rows {
            grid.push_row(row);
        }
        grid
    }

    /// Append a row, keeping the grid rectangular
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        if row.len() > self.columns {
            self.columns = row.len();
            for existing in &mut self.rows {
                existing.resize(self.columns, CellValue::Empty);
            }
        } else {
            row.resize(self.columns, CellValue::Empty);
        }
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (identical for every row)
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get the value at the given row and column
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        let cells = self
            .rows
            .get(row)
            .ok_or(Error::RowOutOfBounds(row, self.rows.len()))?;
        cells
            .get(col)
            .ok_or(Error::ColumnOutOfBounds(col, self.columns))
    }

    /// Set the value at the given row and column
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<()> {
        let row_count = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(Error::RowOutOfBounds(row, row_count))?;
        let cell = cells
            .get_mut(col)
            .ok_or(Error::ColumnOutOfBounds(col, self.columns))?;
        *cell = value;
        Ok(())
    }
}
