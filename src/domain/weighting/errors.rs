//! Error types for binary weighting.

use thiserror::Error;

use crate::domain::foundation::{CellRef, DomainError, ErrorCode, RaggedGridError};
use crate::ports::{GridError, PromptError};

/// Errors that can occur while loading, eliciting or scoring a weighting matrix.
///
/// Validation errors name the sheet cell (A1 notation, header row and
/// column included) where the invariant first failed.
#[derive(Debug, Error)]
pub enum WeightingError {
    #[error("Source matrix not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("Source rows are ragged: row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Valid matrix values are empty, 0 or 1; found '{value}' at {cell}")]
    InvalidValue { cell: CellRef, value: String },

    #[error("Lower triangular matrix should be 0 or empty; found 1 at {cell}")]
    LowerTriangleNotEmpty { cell: CellRef },

    #[error("Upper triangular matrix must be complete; {cell} is empty")]
    UpperTriangleIncomplete { cell: CellRef },

    #[error("Requirement '{0}' appears more than once")]
    DuplicateRequirement(String),

    #[error("Matrix is {matrix}x{matrix} but there are {requirements} requirements")]
    DimensionMismatch { requirements: usize, matrix: usize },

    #[error("Decision ({i}, {j}) is outside the upper triangle of a {size}x{size} matrix")]
    InvalidDecision { i: usize, j: usize, size: usize },

    #[error("Cannot score an empty requirement set")]
    EmptyModel,

    #[error("{0}")]
    UnsupportedSource(String),

    #[error("Grid source failed: {0}")]
    Grid(#[from] GridError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

impl WeightingError {
    /// The domain error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            WeightingError::NotSquare { .. } => ErrorCode::NotSquare,
            WeightingError::RaggedGrid { .. } => ErrorCode::RaggedGrid,
            WeightingError::InvalidValue { .. } => ErrorCode::InvalidValue,
            WeightingError::LowerTriangleNotEmpty { .. } => ErrorCode::LowerTriangleNotEmpty,
            WeightingError::UpperTriangleIncomplete { .. } => ErrorCode::UpperTriangleIncomplete,
            WeightingError::DuplicateRequirement(_) => ErrorCode::DuplicateRequirement,
            WeightingError::DimensionMismatch { .. } | WeightingError::InvalidDecision { .. } => {
                ErrorCode::DimensionMismatch
            }
            WeightingError::EmptyModel => ErrorCode::EmptyModel,
            WeightingError::UnsupportedSource(_) => ErrorCode::UnsupportedSource,
            WeightingError::Grid(GridError::Ragged { .. }) => ErrorCode::RaggedGrid,
            WeightingError::Grid(_) => ErrorCode::GridIo,
            WeightingError::Prompt(_) => ErrorCode::PromptFailed,
        }
    }
}

impl From<RaggedGridError> for WeightingError {
    fn from(err: RaggedGridError) -> Self {
        WeightingError::RaggedGrid {
            row: err.row,
            expected: err.expected,
            actual: err.actual,
        }
    }
}

impl From<WeightingError> for DomainError {
    fn from(err: WeightingError) -> Self {
        let cell = match &err {
            WeightingError::InvalidValue { cell, .. }
            | WeightingError::LowerTriangleNotEmpty { cell }
            | WeightingError::UpperTriangleIncomplete { cell } => Some(*cell),
            _ => None,
        };

        let domain = DomainError::new(err.code(), err.to_string());
        match cell {
            Some(cell) => domain.with_detail("cell", cell.to_string()),
            None => domain,
        }
    }
}
