//! CODA workbook configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;
use super::validate_sheet_path;
use crate::domain::coda::CodaLayout;

/// Where the requirements model is read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkbookConfig {
    /// Sheet file holding the CODA model
    pub path: Option<PathBuf>,

    /// Column layout of the sheet
    #[serde(default)]
    pub layout: CodaLayout,
}

impl WorkbookConfig {
    /// The configured path, or an error naming the missing setting
    pub fn require_path(&self) -> Result<&Path, ValidationError> {
        self.path
            .as_deref()
            .ok_or(ValidationError::MissingRequired("workbook.path"))
    }

    /// Validate workbook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            validate_sheet_path("workbook.path", path)?;
        }
        Ok(())
    }
}
