//! Relationship Row Decoder - one requirement×characteristic slice to a record.
//!
//! Decoding never fails. Slices that are malformed (missing target value,
//! unrecognised Compact symbol) are expected data-entry noise and decode to `None`,
//! which callers treat as "no relationship here".

use tracing::trace;

use crate::domain::foundation::cell_number;

use super::layout::RelationshipCodec;
use super::records::{MinMaxRelationship, OptRelationship, Relationship, RelationshipType};

/// Decodes relationship slices for one layout variant.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipRowDecoder {
    codec: RelationshipCodec,
}

impl RelationshipRowDecoder {
    pub fn new(codec: RelationshipCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> RelationshipCodec {
        self.codec
    }

    /// Decodes a slice, returning `None` when the slice should be skipped.
    ///
    /// Slots missing from a short slice read as blank.
    pub fn decode<S: AsRef<str>>(
        &self,
        requirement: &str,
        characteristic: &str,
        slice: &[S],
    ) -> Option<Relationship> {
        let decoded = match self.codec {
            RelationshipCodec::Full => Self::decode_full(requirement, characteristic, slice),
            RelationshipCodec::Compact => Self::decode_compact(requirement, characteristic, slice),
        };

        if decoded.is_none() {
            trace!(
                requirement,
                characteristic,
                codec = ?self.codec,
                "Skipped relationship slice"
            );
        }
        decoded
    }

    /// `[correlation, type_code, neutral_or_optimum, tolerance]`
    fn decode_full<S: AsRef<str>>(
        requirement: &str,
        characteristic: &str,
        slice: &[S],
    ) -> Option<Relationship> {
        // The target value is always a quantity.
        let target = cell_number(slot(slice, 2))?;
        // Any code other than `opt` is a min/max relationship; only `min`
        // and `max` carry a known direction.
        let relationship_type = slot(slice, 1).parse::<RelationshipType>().ok();
        let correlation = slot(slice, 0).trim().to_string();

        Some(build(
            requirement,
            characteristic,
            relationship_type,
            correlation,
            target,
            || cell_number(slot(slice, 3)),
        ))
    }

    /// `[symbol_and_correlation, target_value, tolerance]`
    fn decode_compact<S: AsRef<str>>(
        requirement: &str,
        characteristic: &str,
        slice: &[S],
    ) -> Option<Relationship> {
        let code = slot(slice, 0).trim();
        let relationship_type = code.chars().next().and_then(RelationshipType::from_symbol)?;
        let target = cell_number(slot(slice, 1))?;

        Some(build(
            requirement,
            characteristic,
            Some(relationship_type),
            code.to_string(),
            target,
            || cell_number(slot(slice, 2)),
        ))
    }
}

fn slot<S: AsRef<str>>(slice: &[S], index: usize) -> &str {
    slice.get(index).map(AsRef::as_ref).unwrap_or("")
}

fn build(
    requirement: &str,
    characteristic: &str,
    relationship_type: Option<RelationshipType>,
    correlation: String,
    target: f64,
    tolerance: impl FnOnce() -> Option<f64>,
) -> Relationship {
    match relationship_type {
        Some(RelationshipType::Opt) => Relationship::Opt(OptRelationship {
            requirement: requirement.to_string(),
            characteristic: characteristic.to_string(),
            relationship_type: RelationshipType::Opt,
            correlation,
            optimum_value: target,
            tolerance: tolerance(),
        }),
        relationship_type => {
            Relationship::MinMax(MinMaxRelationship {
                requirement: requirement.to_string(),
                characteristic: characteristic.to_string(),
                relationship_type,
                correlation,
                neutral_value: target,
            })
        }
    }
}
