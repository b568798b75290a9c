//! Grid value object - a rectangular block of spreadsheet cell text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CellRef;

/// A row whose length differs from the first row's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Row {row} has {actual} cells, expected {expected}")]
pub struct RaggedGridError {
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

/// Rectangular grid of cell strings, row-major.
///
/// Cells are kept exactly as the source supplied them. Blank means empty
/// after trimming whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Creates an empty grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a grid, rejecting ragged rows.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, RaggedGridError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let width = rows.first().map(Vec::len).unwrap_or(0);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(RaggedGridError {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { rows, width })
    }

    /// Creates a grid from rows of unequal length, padding with blanks.
    pub fn padded<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows, width }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row, if present.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell text, or `""` outside the populated range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns true if every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|c| is_blank(c))
    }

    /// Drops trailing rows and columns that are entirely blank.
    pub fn trimmed(mut self) -> Self {
        while self
            .rows
            .last()
            .map(|row| row.iter().all(|c| is_blank(c)))
            .unwrap_or(false)
        {
            self.rows.pop();
        }

        let mut width = self.width;
        while width > 0 && self.rows.iter().all(|row| is_blank(&row[width - 1])) {
            width -= 1;
        }
        for row in &mut self.rows {
            row.truncate(width);
        }
        self.width = if self.rows.is_empty() { 0 } else { width };
        self
    }

    /// Overwrites cells with `block`, its upper-left cell landing at `anchor`.
    ///
    /// The grid grows with blank cells as needed.
    pub fn write_at(&mut self, block: &Grid, anchor: CellRef) {
        if block.is_empty() {
            return;
        }

        let needed_height = anchor.row + block.height();
        let needed_width = self.width.max(anchor.col + block.width());

        while self.rows.len() < needed_height {
            self.rows.push(Vec::new());
        }
        for row in &mut self.rows {
            row.resize(needed_width, String::new());
        }
        self.width = needed_width;

        for (r, block_row) in block.rows.iter().enumerate() {
            for (c, value) in block_row.iter().enumerate() {
                self.rows[anchor.row + r][anchor.col + c] = value.clone();
            }
        }
    }

    /// The block whose upper-left cell is `anchor`, running to the grid's
    /// lower-right corner. Empty if the anchor lies outside the grid.
    pub fn region_from(&self, anchor: CellRef) -> Grid {
        if anchor.row >= self.height() || anchor.col >= self.width {
            return Grid::empty();
        }
        let rows: Vec<Vec<String>> = self.rows[anchor.row..]
            .iter()
            .map(|row| row[anchor.col..].to_vec())
            .collect();
        Self {
            width: self.width - anchor.col,
            rows,
        }
    }

    /// Consumes the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = RaggedGridError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

/// Returns true if the cell is empty after trimming whitespace.
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Parses a cell as a number.
///
/// Blank, non-numeric and NaN cells all read as absent.
pub fn cell_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}
