//! CODA Model Source Port - Where a requirements model is read from.

use crate::domain::coda::{
    CharacteristicDef, CodaModel, ExtractionError, Relationship, RequirementDef,
};

/// Port for reading a CODA requirements model.
///
/// Each accessor may be called independently; implementations are expected
/// to read their backing store at most once.
pub trait CodaModelSource {
    /// Returns true if the source can produce a model.
    fn is_valid(&self) -> bool;

    fn get_characteristics(&self) -> Result<Vec<CharacteristicDef>, ExtractionError>;

    fn get_requirements(&self) -> Result<Vec<RequirementDef>, ExtractionError>;

    /// Relationships in `(requirement, characteristic)` order.
    fn get_relationships(&self) -> Result<Vec<Relationship>, ExtractionError>;

    /// The whole model.
    fn get_model(&self) -> Result<CodaModel, ExtractionError> {
        Ok(CodaModel {
            characteristics: self.get_characteristics()?,
            requirements: self.get_requirements()?,
            relationships: self.get_relationships()?,
        })
    }
}
