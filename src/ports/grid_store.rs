//! Grid Store Ports - Interfaces for reading and writing spreadsheet grids.
//!
//! These ports define how the domain obtains tabular source data and how it
//! writes a grid back. Concrete spreadsheet backends (workbook files,
//! collaborative sheets) live behind these traits.

use crate::domain::foundation::{CellRef, Grid};

/// Errors that can occur while reading or writing a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Grid source not found: {0}")]
    NotFound(String),

    #[error("Failed to serialize grid: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize grid: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported grid format: {0}")]
    UnsupportedFormat(String),
}

/// Port for reading a grid of cells.
pub trait GridSource {
    /// Read the populated grid.
    ///
    /// # Returns
    /// A rectangular grid with trailing fully-blank rows and columns trimmed.
    ///
    /// # Errors
    /// Returns `GridError` if the backend cannot be read.
    fn read_grid(&self) -> Result<Grid, GridError>;
}

/// Port for writing a grid back to its backend.
pub trait GridSink {
    /// Write `grid` so that its upper-left cell lands at `anchor`.
    ///
    /// Cells outside the written block are left untouched.
    ///
    /// # Errors
    /// Returns `GridError` if the backend cannot be written.
    fn write_grid(&mut self, grid: &Grid, anchor: CellRef) -> Result<(), GridError>;
}

impl<T: GridSource + ?Sized> GridSource for &T {
    fn read_grid(&self) -> Result<Grid, GridError> {
        (**self).read_grid()
    }
}

impl<T: GridSource + ?Sized> GridSource for Box<T> {
    fn read_grid(&self) -> Result<Grid, GridError> {
        (**self).read_grid()
    }
}

impl<T: GridSink + ?Sized> GridSink for Box<T> {
    fn write_grid(&mut self, grid: &Grid, anchor: CellRef) -> Result<(), GridError> {
        (**self).write_grid(grid, anchor)
    }
}

impl From<crate::domain::foundation::RaggedGridError> for GridError {
    fn from(err: crate::domain::foundation::RaggedGridError) -> Self {
        GridError::Ragged {
            row: err.row,
            expected: err.expected,
            actual: err.actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RaggedGridError;

    #[test]
    fn test_grid_error_not_found() {
        let err = GridError::NotFound("model.yaml".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("model.yaml"));
    }

    #[test]
    fn test_grid_error_from_ragged() {
        let err: GridError = RaggedGridError {
            row: 3,
            expected: 4,
            actual: 2,
        }
        .into();
        assert!(err.to_string().contains("row 3 has 2 cells, expected 4"));
    }

    #[test]
    fn test_grid_error_serialization() {
        let err = GridError::SerializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
