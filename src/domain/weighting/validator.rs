//! Comparison matrix validation.
//!
//! Turns the raw rows of a weighting sheet into a trusted matrix. The checks
//! run in a fixed order so that the first reported error is predictable.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::comparison_matrix::header_cell;
use super::{ComparisonMatrix, WeightingError};
use crate::domain::foundation::Grid;

/// A weighting sheet that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSheet {
    /// Upper-left header cell.
    pub label: String,
    /// Column header labels, in sheet order.
    pub requirements: Vec<String>,
    pub matrix: ComparisonMatrix,
}

/// Validates weighting sheets of the form:
///
/// ```text
/// label | req_1 | req_2 | ...
/// req_1 | c11   | c12   | ...
/// req_2 | c21   | c22   | ...
/// ```
pub struct ComparisonMatrixValidator;

impl ComparisonMatrixValidator {
    /// Validates raw rows, rejecting ragged input before any other check.
    pub fn validate_rows(rows: Vec<Vec<String>>) -> Result<ValidatedSheet, WeightingError> {
        let grid = Grid::from_rows(rows)?;
        Self::validate(&grid)
    }

    /// Validates a rectangular grid including its header row and column.
    pub fn validate(grid: &Grid) -> Result<ValidatedSheet, WeightingError> {
        let label = grid.cell(0, 0).trim().to_string();
        let requirements: Vec<String> = grid
            .row(0)
            .map(|header| header.iter().skip(1).map(|c| c.trim().to_string()).collect())
            .unwrap_or_default();

        let rows = grid.height().saturating_sub(1);
        let cols = grid.width().saturating_sub(1);
        let cells: Vec<Vec<&str>> = grid
            .rows()
            .iter()
            .skip(1)
            .map(|row| row.iter().skip(1).map(String::as_str).collect())
            .collect();

        let matrix = Self::check_cells(&cells, rows, cols)?;

        Self::check_unique(&requirements)?;
        Self::check_row_labels(grid, &requirements);

        debug!(
            label = %label,
            requirements = requirements.len(),
            "Weighting sheet validated"
        );

        Ok(ValidatedSheet {
            label,
            requirements,
            matrix,
        })
    }

    fn check_cells(
        cells: &[Vec<&str>],
        rows: usize,
        cols: usize,
    ) -> Result<ComparisonMatrix, WeightingError> {
        if rows != cols {
            return Err(WeightingError::NotSquare { rows, cols });
        }
        let n = rows;

        for (i, row) in cells.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if !matches!(*value, "" | "0" | "1") {
                    return Err(WeightingError::InvalidValue {
                        cell: header_cell(i, j),
                        value: (*value).to_string(),
                    });
                }
            }
        }

        if cells.iter().flatten().all(|v| *v == "0") {
            return Ok(ComparisonMatrix::zeros(n));
        }

        for (i, row) in cells.iter().enumerate() {
            for (j, value) in row.iter().enumerate().take(i) {
                if *value == "1" {
                    return Err(WeightingError::LowerTriangleNotEmpty {
                        cell: header_cell(i, j),
                    });
                }
            }
        }

        let upper = || {
            cells
                .iter()
                .enumerate()
                .flat_map(|(i, row)| row.iter().enumerate().skip(i + 1).map(move |(j, v)| (i, j, *v)))
        };

        if upper().all(|(_, _, v)| v.is_empty()) {
            return Ok(ComparisonMatrix::zeros(n));
        }

        if let Some((i, j, _)) = upper().find(|(_, _, v)| v.is_empty()) {
            return Err(WeightingError::UpperTriangleIncomplete {
                cell: header_cell(i, j),
            });
        }

        let mut matrix = ComparisonMatrix::zeros(n);
        for (i, j, value) in upper() {
            matrix.record(i, j, value == "1")?;
        }
        Ok(matrix)
    }

    pub(crate) fn check_unique(requirements: &[String]) -> Result<(), WeightingError> {
        let mut seen = HashSet::new();
        for requirement in requirements {
            if !seen.insert(requirement.as_str()) {
                return Err(WeightingError::DuplicateRequirement(requirement.clone()));
            }
        }
        Ok(())
    }

    // Row labels are informational; column headers are authoritative.
    fn check_row_labels(grid: &Grid, requirements: &[String]) {
        for (i, requirement) in requirements.iter().enumerate() {
            let row_label = grid.cell(i + 1, 0).trim();
            if row_label != requirement {
                warn!(
                    row = i + 1,
                    row_label = %row_label,
                    column_label = %requirement,
                    "Row label differs from column header"
                );
            }
        }
    }
}
