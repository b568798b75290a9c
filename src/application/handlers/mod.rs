//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod coda;
pub mod weighting;

pub use coda::{ExtractModelHandler, ExtractModelResult};
pub use weighting::{ElicitWeightsHandler, ScoreRequirementsHandler, WeightingReport};
