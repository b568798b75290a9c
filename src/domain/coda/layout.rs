//! Sheet layout conventions for CODA workbooks.
//!
//! Both workbook templates share the same row structure and differ only in
//! how many columns describe one characteristic and how relationship cells
//! are encoded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Row holding characteristic names.
pub const HEADER_ROW: usize = 0;
/// Row holding characteristic min/max bounds.
pub const BOUNDS_ROW: usize = 1;
/// Row holding field labels (`Requirements`, `Weighting`, `Correlation`, ...).
pub const FIELD_LABEL_ROW: usize = 2;
/// First requirement row.
pub const FIRST_REQUIREMENT_ROW: usize = 3;

/// First column of the characteristics block (column C).
pub const CHARACTERISTIC_START_COL: usize = 2;
/// Last column of the characteristics block (column CZ).
pub const LAST_CHARACTERISTIC_COL: usize = 103;

/// Field label of the requirement name column.
pub const REQUIREMENTS_LABEL: &str = "Requirements";
/// Field label of the requirement weight column.
pub const WEIGHTING_LABEL: &str = "Weighting";

/// How one relationship slice is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipCodec {
    /// `[correlation, type_code, neutral_or_optimum, tolerance]`
    Full,
    /// `[symbol_and_correlation, target_value, tolerance]`
    Compact,
}

/// Column arithmetic for one layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpec {
    /// Columns per characteristic group.
    pub group_width: usize,
    pub codec: RelationshipCodec,
    /// Field label of the first relationship column.
    pub relationship_anchor: &'static str,
}

impl LayoutSpec {
    pub const FULL: Self = Self {
        group_width: 4,
        codec: RelationshipCodec::Full,
        relationship_anchor: "Correlation",
    };

    pub const COMPACT: Self = Self {
        group_width: 3,
        codec: RelationshipCodec::Compact,
        relationship_anchor: "Relationship Type",
    };

    /// Relative index of the column holding the maximum bound.
    pub fn max_offset(&self) -> usize {
        self.group_width - 1
    }
}

/// The sheet layouts a model source can be built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodaLayout {
    /// Four columns per characteristic, explicit type codes.
    #[default]
    Full,
    /// Three columns per characteristic, symbol-coded types.
    Compact,
    /// Remote collaborative sheet; no extraction is implemented for it.
    Collaborative,
}

impl CodaLayout {
    /// Column arithmetic for this layout, if extraction is supported.
    pub fn spec(&self) -> Option<LayoutSpec> {
        match self {
            CodaLayout::Full => Some(LayoutSpec::FULL),
            CodaLayout::Compact => Some(LayoutSpec::COMPACT),
            CodaLayout::Collaborative => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodaLayout::Full => "full",
            CodaLayout::Compact => "compact",
            CodaLayout::Collaborative => "collaborative",
        }
    }
}

impl FromStr for CodaLayout {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(CodaLayout::Full),
            "compact" => Ok(CodaLayout::Compact),
            "collaborative" => Ok(CodaLayout::Collaborative),
            other => Err(ValidationError::invalid_format(
                "layout",
                format!("unknown layout '{}'", other),
            )),
        }
    }
}

impl fmt::Display for CodaLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
