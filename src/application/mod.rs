//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries read a sheet; commands also write back to it.

pub mod handlers;

pub use handlers::{
    // CODA handlers
    ExtractModelHandler, ExtractModelResult,
    // Weighting handlers
    ElicitWeightsHandler, ScoreRequirementsHandler, WeightingReport,
};
