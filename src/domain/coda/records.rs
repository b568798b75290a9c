//! Record types for a CODA requirements model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{cell_number, ValidationError};

/// An engineering characteristic with optional acceptable bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicDef {
    pub name: String,
    /// Absent when the source cell was blank or not numeric.
    pub min: Option<f64>,
    /// Absent when the source cell was blank or not numeric.
    pub max: Option<f64>,
}

impl CharacteristicDef {
    /// Creates a characteristic definition.
    pub fn new(name: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }
}

/// A stakeholder requirement with its user-supplied relative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementDef {
    pub name: String,
    /// Absent when the weight cell was blank.
    pub weight: Option<f64>,
}

impl RequirementDef {
    /// Creates a requirement definition.
    pub fn new(name: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Direction in which a characteristic's value satisfies a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Lower values are better.
    Min,
    /// Higher values are better.
    Max,
    /// Values close to an optimum are better.
    Opt,
}

impl RelationshipType {
    /// Returns the code used in Full layout sheets.
    pub fn code(&self) -> &'static str {
        match self {
            RelationshipType::Min => "min",
            RelationshipType::Max => "max",
            RelationshipType::Opt => "opt",
        }
    }

    /// Maps a Compact layout symbol (`+`, `o`, `-`) to a type.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(RelationshipType::Max),
            'o' => Some(RelationshipType::Opt),
            '-' => Some(RelationshipType::Min),
            _ => None,
        }
    }
}

impl FromStr for RelationshipType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(RelationshipType::Min),
            "max" => Ok(RelationshipType::Max),
            "opt" => Ok(RelationshipType::Opt),
            other => Err(ValidationError::invalid_format(
                "relationship_type",
                format!("unknown code '{}'", other),
            )),
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A minimize/maximize relationship with the value the characteristic
/// should approach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxRelationship {
    pub requirement: String,
    pub characteristic: String,
    /// `None` when the sheet's type code is neither `min` nor `max`.
    pub relationship_type: Option<RelationshipType>,
    pub correlation: String,
    pub neutral_value: f64,
}

/// A target-optimum relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptRelationship {
    pub requirement: String,
    pub characteristic: String,
    pub relationship_type: RelationshipType,
    pub correlation: String,
    pub optimum_value: f64,
    pub tolerance: Option<f64>,
}

/// How a requirement's satisfaction depends on a characteristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Relationship {
    MinMax(MinMaxRelationship),
    Opt(OptRelationship),
}

impl Relationship {
    /// The requirement this relationship belongs to.
    pub fn requirement(&self) -> &str {
        match self {
            Relationship::MinMax(r) => &r.requirement,
            Relationship::Opt(r) => &r.requirement,
        }
    }

    /// The characteristic this relationship depends on.
    pub fn characteristic(&self) -> &str {
        match self {
            Relationship::MinMax(r) => &r.characteristic,
            Relationship::Opt(r) => &r.characteristic,
        }
    }

    /// The relationship direction, if the sheet named one.
    pub fn relationship_type(&self) -> Option<RelationshipType> {
        match self {
            Relationship::MinMax(r) => r.relationship_type,
            Relationship::Opt(r) => Some(r.relationship_type),
        }
    }

    /// Raw correlation cell text.
    pub fn correlation(&self) -> &str {
        match self {
            Relationship::MinMax(r) => &r.correlation,
            Relationship::Opt(r) => &r.correlation,
        }
    }

    /// Numeric correlation strength, ignoring a leading Compact type symbol.
    ///
    /// `"0.8"`, `"+0.8"` and `"o0.8"` all give `0.8`; `"-0.8"` gives `0.8`
    /// as well since the sign encodes direction, not strength.
    pub fn correlation_strength(&self) -> Option<f64> {
        let raw = self.correlation().trim();
        let digits = raw
            .strip_prefix(|c: char| RelationshipType::from_symbol(c).is_some())
            .unwrap_or(raw);
        cell_number(digits).map(f64::abs)
    }

    /// The value the characteristic should approach.
    pub fn target_value(&self) -> f64 {
        match self {
            Relationship::MinMax(r) => r.neutral_value,
            Relationship::Opt(r) => r.optimum_value,
        }
    }
}

/// The three independently consumable sequences extracted from a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodaModel {
    pub characteristics: Vec<CharacteristicDef>,
    pub requirements: Vec<RequirementDef>,
    pub relationships: Vec<Relationship>,
}

impl CodaModel {
    /// Returns true if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.characteristics.is_empty()
            && self.requirements.is_empty()
            && self.relationships.is_empty()
    }

    /// Relationships belonging to one requirement, in extraction order.
    pub fn relationships_for<'a>(
        &'a self,
        requirement: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.requirement() == requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_max(correlation: &str) -> Relationship {
        Relationship::MinMax(MinMaxRelationship {
            requirement: "Stiffness".to_string(),
            characteristic: "Tyre Width".to_string(),
            relationship_type: Some(RelationshipType::Max),
            correlation: correlation.to_string(),
            neutral_value: 12.0,
        })
    }

    #[test]
    fn relationship_type_parses_codes_case_insensitively() {
        assert_eq!("min".parse::<RelationshipType>().unwrap(), RelationshipType::Min);
        assert_eq!(" MAX ".parse::<RelationshipType>().unwrap(), RelationshipType::Max);
        assert_eq!("Opt".parse::<RelationshipType>().unwrap(), RelationshipType::Opt);
        assert!("optimum".parse::<RelationshipType>().is_err());
        assert!("".parse::<RelationshipType>().is_err());
    }

    #[test]
    fn relationship_type_maps_compact_symbols() {
        assert_eq!(RelationshipType::from_symbol('+'), Some(RelationshipType::Max));
        assert_eq!(RelationshipType::from_symbol('o'), Some(RelationshipType::Opt));
        assert_eq!(RelationshipType::from_symbol('-'), Some(RelationshipType::Min));
        assert_eq!(RelationshipType::from_symbol('x'), None);
        assert_eq!(RelationshipType::from_symbol('O'), None);
    }

    #[test]
    fn correlation_strength_strips_symbol() {
        assert_eq!(min_max("0.8").correlation_strength(), Some(0.8));
        assert_eq!(min_max("+0.8").correlation_strength(), Some(0.8));
        assert_eq!(min_max("o0.5").correlation_strength(), Some(0.5));
        assert_eq!(min_max("-0.3").correlation_strength(), Some(0.3));
        assert_eq!(min_max("+").correlation_strength(), None);
    }

    #[test]
    fn accessors_cover_both_variants() {
        let opt = Relationship::Opt(OptRelationship {
            requirement: "Friction".to_string(),
            characteristic: "Tyre Diameter".to_string(),
            relationship_type: RelationshipType::Opt,
            correlation: "o0.9".to_string(),
            optimum_value: 26.0,
            tolerance: Some(1.5),
        });

        assert_eq!(opt.requirement(), "Friction");
        assert_eq!(opt.characteristic(), "Tyre Diameter");
        assert_eq!(opt.relationship_type(), Some(RelationshipType::Opt));
        assert_eq!(opt.target_value(), 26.0);

        let mm = min_max("+0.8");
        assert_eq!(mm.target_value(), 12.0);
        assert_eq!(mm.relationship_type(), Some(RelationshipType::Max));
    }

    #[test]
    fn relationship_serializes_with_variant_tag() {
        let json = serde_json::to_value(min_max("0.8")).unwrap();
        assert_eq!(json["variant"], "min_max");
        assert_eq!(json["relationship_type"], "max");
        assert_eq!(json["neutral_value"], 12.0);
    }

    #[test]
    fn unnamed_direction_serializes_as_null() {
        let mut rel = min_max("0.8");
        if let Relationship::MinMax(mm) = &mut rel {
            mm.relationship_type = None;
        }
        let json = serde_json::to_value(rel).unwrap();
        assert!(json["relationship_type"].is_null());
    }

    #[test]
    fn model_filters_relationships_by_requirement() {
        let model = CodaModel {
            characteristics: vec![],
            requirements: vec![RequirementDef::new("Stiffness", Some(0.2))],
            relationships: vec![min_max("0.8"), min_max("0.4")],
        };

        assert_eq!(model.relationships_for("Stiffness").count(), 2);
        assert_eq!(model.relationships_for("Weight").count(), 0);
        assert!(!model.is_empty());
        assert!(CodaModel::default().is_empty());
    }
}
