//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Path for {0} is empty")]
    EmptyPath(&'static str),

    #[error("Unsupported sheet file '{0}': expected .yaml, .yml or .json")]
    UnsupportedExtension(String),

    #[error("Invalid anchor cell '{0}': expected A1 notation")]
    InvalidAnchor(String),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
