//! Weighting handlers.

mod elicit_weights;
mod score_requirements;

pub use elicit_weights::ElicitWeightsHandler;
pub use score_requirements::{ScoreRequirementsHandler, WeightingReport};
