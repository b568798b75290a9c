//! CODA Module - requirements model extraction from tabular sheets.
//!
//! A CODA sheet lists characteristics (with bounds) across the top,
//! requirements (with weights) down the side, and a relationship cell group
//! for every requirement×characteristic pair.
//!
//! # Components
//!
//! - `CodaLayout` / `LayoutSpec` - column arithmetic for the Full and Compact templates
//! - `RelationshipRowDecoder` - one relationship slice to an optional record
//! - `TabularModelExtractor` - characteristics, requirements and relationships from a grid

mod errors;
mod extractor;
mod layout;
mod records;
mod row_decoder;

pub use errors::ExtractionError;
pub use extractor::TabularModelExtractor;
pub use layout::{
    CodaLayout, LayoutSpec, RelationshipCodec, BOUNDS_ROW, CHARACTERISTIC_START_COL,
    FIELD_LABEL_ROW, FIRST_REQUIREMENT_ROW, HEADER_ROW, LAST_CHARACTERISTIC_COL,
    REQUIREMENTS_LABEL, WEIGHTING_LABEL,
};
pub use records::{
    CharacteristicDef, CodaModel, MinMaxRelationship, OptRelationship, Relationship,
    RelationshipType, RequirementDef,
};
pub use row_decoder::RelationshipRowDecoder;
