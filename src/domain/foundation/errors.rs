//! Error types shared across the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Broad classification of a failure, used to decide how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The grid does not have the expected shape.
    Structural,
    /// The grid has the right shape but illegal or inconsistent cell contents.
    Content,
    /// An operation needs at least one requirement.
    EmptyModel,
    /// The source has no implementation for the requested operation.
    UnsupportedSource,
    /// I/O, serialization or operator interaction failed.
    Infrastructure,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Structural errors
    NotSquare,
    RaggedGrid,
    MissingColumn,
    DimensionMismatch,

    // Content errors
    InvalidValue,
    LowerTriangleNotEmpty,
    UpperTriangleIncomplete,
    DuplicateRequirement,
    InvalidWeight,

    // Model errors
    EmptyModel,
    UnsupportedSource,

    // Infrastructure errors
    GridIo,
    PromptFailed,
}

impl ErrorCode {
    /// Returns the category this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::NotSquare
            | ErrorCode::RaggedGrid
            | ErrorCode::MissingColumn
            | ErrorCode::DimensionMismatch => ErrorCategory::Structural,
            ErrorCode::InvalidValue
            | ErrorCode::LowerTriangleNotEmpty
            | ErrorCode::UpperTriangleIncomplete
            | ErrorCode::DuplicateRequirement
            | ErrorCode::InvalidWeight => ErrorCategory::Content,
            ErrorCode::EmptyModel => ErrorCategory::EmptyModel,
            ErrorCode::UnsupportedSource => ErrorCategory::UnsupportedSource,
            ErrorCode::GridIo | ErrorCode::PromptFailed => ErrorCategory::Infrastructure,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NotSquare => "NOT_SQUARE",
            ErrorCode::RaggedGrid => "RAGGED_GRID",
            ErrorCode::MissingColumn => "MISSING_COLUMN",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::LowerTriangleNotEmpty => "LOWER_TRIANGLE_NOT_EMPTY",
            ErrorCode::UpperTriangleIncomplete => "UPPER_TRIANGLE_INCOMPLETE",
            ErrorCode::DuplicateRequirement => "DUPLICATE_REQUIREMENT",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::EmptyModel => "EMPTY_MODEL",
            ErrorCode::UnsupportedSource => "UNSUPPORTED_SOURCE",
            ErrorCode::GridIo => "GRID_IO",
            ErrorCode::PromptFailed => "PROMPT_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the category of the underlying code.
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
