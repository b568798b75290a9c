//! ExtractModelHandler - Query handler that reads a CODA model from a sheet.

use tracing::info;

use crate::domain::coda::CodaModel;
use crate::domain::foundation::DomainError;
use crate::ports::CodaModelSource;

/// Result of a successful extraction.
#[derive(Debug, Clone)]
pub struct ExtractModelResult {
    pub model: CodaModel,
}

/// Handler for extracting requirements models.
pub struct ExtractModelHandler<M> {
    source: M,
}

impl<M: CodaModelSource> ExtractModelHandler<M> {
    pub fn new(source: M) -> Self {
        Self { source }
    }

    pub fn handle(&self) -> Result<ExtractModelResult, DomainError> {
        let model = self.source.get_model()?;

        info!(
            characteristics = model.characteristics.len(),
            requirements = model.requirements.len(),
            relationships = model.relationships.len(),
            "Extracted CODA model"
        );

        Ok(ExtractModelResult { model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coda::{
        CharacteristicDef, ExtractionError, Relationship, RequirementDef,
    };
    use crate::domain::foundation::ErrorCode;

    struct MockSource {
        fail: bool,
    }

    impl CodaModelSource for MockSource {
        fn is_valid(&self) -> bool {
            !self.fail
        }

        fn get_characteristics(&self) -> Result<Vec<CharacteristicDef>, ExtractionError> {
            Ok(vec![CharacteristicDef::new("Mass", Some(0.5), Some(3.0))])
        }

        fn get_requirements(&self) -> Result<Vec<RequirementDef>, ExtractionError> {
            if self.fail {
                return Err(ExtractionError::MissingColumn {
                    label: "Weighting".to_string(),
                    row: 2,
                });
            }
            Ok(vec![RequirementDef::new("Light", Some(1.0))])
        }

        fn get_relationships(&self) -> Result<Vec<Relationship>, ExtractionError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn returns_model_from_source() {
        let handler = ExtractModelHandler::new(MockSource { fail: false });
        let result = handler.handle().unwrap();

        assert_eq!(result.model.characteristics.len(), 1);
        assert_eq!(result.model.requirements[0].name, "Light");
        assert!(result.model.relationships.is_empty());
    }

    #[test]
    fn surfaces_extraction_errors_as_domain_errors() {
        let handler = ExtractModelHandler::new(MockSource { fail: true });
        let err = handler.handle().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingColumn);
    }
}
