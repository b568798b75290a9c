//! Tabular Model Extractor - rebuilds CODA records from a sheet grid.
//!
//! # Grid convention
//!
//! | Row | Contents |
//! |-----|----------|
//! | 0   | characteristic names at the start of each column group |
//! | 1   | min bound at relative index 1, max bound at the group's last column |
//! | 2   | field labels (`Requirements`, `Weighting`, relationship fields) |
//! | 3.. | one requirement per row: name, weight, relationship groups |
//!
//! Characteristic groups start at column C. Relationship groups start at the
//! layout's anchor column and use the same group width.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::domain::foundation::{cell_number, is_blank, Grid};

use super::errors::ExtractionError;
use super::layout::{
    CodaLayout, LayoutSpec, BOUNDS_ROW, CHARACTERISTIC_START_COL, FIELD_LABEL_ROW,
    FIRST_REQUIREMENT_ROW, HEADER_ROW, LAST_CHARACTERISTIC_COL, REQUIREMENTS_LABEL,
    WEIGHTING_LABEL,
};
use super::records::{CharacteristicDef, CodaModel, Relationship, RequirementDef};
use super::row_decoder::RelationshipRowDecoder;

/// Labels spreadsheet backends invent for blank header cells.
static DEFAULT_COLUMN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Unnamed: \d+|Characteristic \d+)$").unwrap());

/// Extracts characteristics, requirements and relationships for one layout.
#[derive(Debug, Clone, Copy)]
pub struct TabularModelExtractor {
    spec: LayoutSpec,
    decoder: RelationshipRowDecoder,
}

impl TabularModelExtractor {
    /// Creates an extractor for an explicit layout spec.
    pub fn new(spec: LayoutSpec) -> Self {
        Self {
            spec,
            decoder: RelationshipRowDecoder::new(spec.codec),
        }
    }

    /// Creates an extractor for a named layout.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSource` for layouts without column arithmetic.
    pub fn for_layout(layout: CodaLayout) -> Result<Self, ExtractionError> {
        layout
            .spec()
            .map(Self::new)
            .ok_or_else(|| ExtractionError::UnsupportedSource {
                layout: layout.to_string(),
            })
    }

    pub fn spec(&self) -> LayoutSpec {
        self.spec
    }

    /// Extracts the full model.
    pub fn extract(&self, grid: &Grid) -> Result<CodaModel, ExtractionError> {
        let characteristics = self.characteristics(grid);
        let requirements = self.requirements(grid)?;
        let relationships = self.relationships(grid, &requirements, &characteristics)?;

        Ok(CodaModel {
            characteristics,
            requirements,
            relationships,
        })
    }

    /// Characteristic definitions from the header and bounds rows.
    ///
    /// For block column `i`, `i mod W == 0` starts a characteristic, `1` holds
    /// its minimum and `W - 1` its maximum; other columns are ignored. Blank
    /// or backend-generated names are rejected with a warning.
    pub fn characteristics(&self, grid: &Grid) -> Vec<CharacteristicDef> {
        let width = self.spec.group_width;
        let last = LAST_CHARACTERISTIC_COL.min(grid.width().saturating_sub(1));

        let mut characteristics = Vec::new();
        if grid.width() <= CHARACTERISTIC_START_COL {
            return characteristics;
        }

        for start in (CHARACTERISTIC_START_COL..=last).step_by(width) {
            let name = grid.cell(HEADER_ROW, start).trim();
            if is_blank(name) || DEFAULT_COLUMN_LABEL.is_match(name) {
                warn!(
                    column = start,
                    name, "Picked up a default column name; characteristic skipped"
                );
                continue;
            }

            characteristics.push(CharacteristicDef::new(
                name,
                cell_number(grid.cell(BOUNDS_ROW, start + 1)),
                cell_number(grid.cell(BOUNDS_ROW, start + self.spec.max_offset())),
            ));
        }

        debug!(count = characteristics.len(), "Extracted characteristics");
        characteristics
    }

    /// Requirement names and weights from the two fixed-name columns.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if either label is absent and `InvalidWeight`
    /// if a weight cell holds non-numeric text. Blank weights are absent.
    pub fn requirements(&self, grid: &Grid) -> Result<Vec<RequirementDef>, ExtractionError> {
        let columns = (
            Self::find_label(grid, WEIGHTING_LABEL)?,
            Self::find_label(grid, REQUIREMENTS_LABEL)?,
        );

        let mut requirements = Vec::new();
        for row in FIRST_REQUIREMENT_ROW..grid.height() {
            let (weight, name) = (grid.cell(row, columns.0), grid.cell(row, columns.1).trim());
            let weight = if is_blank(weight) {
                warn!(requirement = name, row, "Requirement has no weight");
                None
            } else {
                let value = cell_number(weight).ok_or_else(|| ExtractionError::InvalidWeight {
                    requirement: name.to_string(),
                    value: weight.to_string(),
                    row,
                })?;
                Some(value)
            };
            requirements.push(RequirementDef::new(name, weight));
        }

        debug!(count = requirements.len(), "Extracted requirements");
        Ok(requirements)
    }

    /// Relationships for every requirement×characteristic pair.
    ///
    /// Names are used only as labels; requirement `i` reads grid row
    /// `3 + i` and characteristic `j` reads the slice at `j * W` from the
    /// layout's anchor column. Undecodable slices are skipped.
    pub fn relationships(
        &self,
        grid: &Grid,
        requirements: &[RequirementDef],
        characteristics: &[CharacteristicDef],
    ) -> Result<Vec<Relationship>, ExtractionError> {
        let anchor = Self::find_label(grid, self.spec.relationship_anchor)?;
        let width = self.spec.group_width;

        let mut relationships = Vec::new();
        for (i, requirement) in requirements.iter().enumerate() {
            let row = FIRST_REQUIREMENT_ROW + i;
            for (j, characteristic) in characteristics.iter().enumerate() {
                let start = anchor + j * width;
                let slice: Vec<&str> = (start..start + width).map(|col| grid.cell(row, col)).collect();

                if let Some(relationship) =
                    self.decoder
                        .decode(&requirement.name, &characteristic.name, &slice)
                {
                    relationships.push(relationship);
                }
            }
        }

        debug!(
            count = relationships.len(),
            pairs = requirements.len() * characteristics.len(),
            "Extracted relationships"
        );
        Ok(relationships)
    }

    /// Column index of the first field label equal to `label`.
    fn find_label(grid: &Grid, label: &str) -> Result<usize, ExtractionError> {
        grid.row(FIELD_LABEL_ROW)
            .and_then(|row| row.iter().position(|cell| cell.trim() == label))
            .ok_or_else(|| ExtractionError::MissingColumn {
                label: label.to_string(),
                row: FIELD_LABEL_ROW,
            })
    }
}
