//! Error types for CODA model extraction.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::GridError;

/// Errors that can occur while extracting a model from a grid.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Column '{label}' not found in field label row {row}")]
    MissingColumn { label: String, row: usize },

    #[error("Requirement '{requirement}' has non-numeric weight '{value}' (row {row})")]
    InvalidWeight {
        requirement: String,
        value: String,
        row: usize,
    },

    #[error("Model extraction is not implemented for the {layout} layout")]
    UnsupportedSource { layout: String },

    #[error("Grid source failed: {0}")]
    Grid(#[from] GridError),
}

impl ExtractionError {
    /// The domain error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExtractionError::MissingColumn { .. } => ErrorCode::MissingColumn,
            ExtractionError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            ExtractionError::UnsupportedSource { .. } => ErrorCode::UnsupportedSource,
            ExtractionError::Grid(GridError::Ragged { .. }) => ErrorCode::RaggedGrid,
            ExtractionError::Grid(_) => ErrorCode::GridIo,
        }
    }
}

impl From<ExtractionError> for DomainError {
    fn from(err: ExtractionError) -> Self {
        let detail = match &err {
            ExtractionError::MissingColumn { label, .. } => Some(("column", label.clone())),
            ExtractionError::InvalidWeight { requirement, .. } => {
                Some(("requirement", requirement.clone()))
            }
            ExtractionError::UnsupportedSource { layout } => Some(("layout", layout.clone())),
            ExtractionError::Grid(_) => None,
        };

        let domain = DomainError::new(err.code(), err.to_string());
        match detail {
            Some((key, value)) => domain.with_detail(key, value),
            None => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCategory;

    #[test]
    fn missing_column_is_structural() {
        let err = ExtractionError::MissingColumn {
            label: "Weighting".to_string(),
            row: 2,
        };
        assert_eq!(err.code().category(), ErrorCategory::Structural);
        assert_eq!(
            err.to_string(),
            "Column 'Weighting' not found in field label row 2"
        );
    }

    #[test]
    fn invalid_weight_is_content_error() {
        let err = ExtractionError::InvalidWeight {
            requirement: "Stiffness".to_string(),
            value: "high".to_string(),
            row: 3,
        };
        assert_eq!(err.code().category(), ErrorCategory::Content);
    }

    #[test]
    fn converts_to_domain_error_with_detail() {
        let err = ExtractionError::UnsupportedSource {
            layout: "collaborative".to_string(),
        };
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::UnsupportedSource);
        assert_eq!(domain.details.get("layout"), Some(&"collaborative".to_string()));
    }

    #[test]
    fn ragged_grid_maps_to_structural_code() {
        let err = ExtractionError::Grid(GridError::Ragged {
            row: 1,
            expected: 3,
            actual: 2,
        });
        assert_eq!(err.code(), ErrorCode::RaggedGrid);
    }
}
