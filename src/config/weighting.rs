//! Weighting sheet configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;
use super::validate_sheet_path;
use crate::domain::foundation::CellRef;

/// Where the binary weighting matrix lives and how it is elicited
#[derive(Debug, Clone, Deserialize)]
pub struct WeightingConfig {
    /// Sheet file holding the matrix
    pub path: Option<PathBuf>,

    /// Ask pairwise questions in random order
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,

    /// Cell receiving the header corner when the matrix is saved
    #[serde(default = "default_anchor")]
    pub anchor: String,
}

impl WeightingConfig {
    /// The configured path, or an error naming the missing setting
    pub fn require_path(&self) -> Result<&Path, ValidationError> {
        self.path
            .as_deref()
            .ok_or(ValidationError::MissingRequired("weighting.path"))
    }

    /// The parsed anchor cell
    pub fn anchor_cell(&self) -> Result<CellRef, ValidationError> {
        self.anchor
            .parse()
            .map_err(|_| ValidationError::InvalidAnchor(self.anchor.clone()))
    }

    /// Validate weighting configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.anchor_cell()?;
        if let Some(path) = &self.path {
            validate_sheet_path("weighting.path", path)?;
        }
        Ok(())
    }
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            path: None,
            shuffle: default_shuffle(),
            anchor: default_anchor(),
        }
    }
}

fn default_shuffle() -> bool {
    true
}

fn default_anchor() -> String {
    "A1".to_string()
}
