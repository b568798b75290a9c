//! Foundation module - Shared domain primitives.
//!
//! Contains the grid value objects and error types that form the
//! vocabulary of the extraction and weighting domains.

mod cell_ref;
mod errors;
mod grid;

pub use cell_ref::CellRef;
pub use errors::{DomainError, ErrorCategory, ErrorCode, ValidationError};
pub use grid::{cell_number, is_blank, Grid, RaggedGridError};
