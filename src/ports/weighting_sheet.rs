//! Weighting Sheet Port - A spreadsheet holding a binary weighting matrix.

use crate::domain::foundation::Grid;
use crate::domain::weighting::{ComparisonMatrix, WeightingError};

/// Port for a sheet that stores requirement labels and pairwise decisions.
///
/// Implementations read lazily and may cache what they read; repeated calls
/// return the same result.
pub trait WeightingSheet {
    /// Returns true if the sheet passes matrix validation.
    fn is_valid(&self) -> bool;

    /// The upper-left header cell.
    fn get_label(&self) -> Result<String, WeightingError>;

    /// Requirement labels from the header row.
    fn get_requirements(&self) -> Result<Vec<String>, WeightingError>;

    /// The validated comparison matrix.
    fn get_value_matrix(&self) -> Result<ComparisonMatrix, WeightingError>;

    /// Writes `grid` so its header corner lands on the sheet's anchor cell.
    fn update(&mut self, grid: &Grid) -> Result<(), WeightingError>;
}
