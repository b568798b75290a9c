//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Grid Ports
//!
//! - `GridSource` / `GridSink` - Raw spreadsheet cell access
//!
//! ## Model Ports
//!
//! - `CodaModelSource` - Reads a requirements model
//! - `WeightingSheet` - Reads and writes a binary weighting matrix
//!
//! ## Interaction Ports
//!
//! - `DecisionPrompt` - Asks the operator pairwise questions

mod coda_model_source;
mod decision_prompt;
mod grid_store;
mod weighting_sheet;

pub use coda_model_source::CodaModelSource;
pub use decision_prompt::{DecisionPrompt, PromptError};
pub use grid_store::{GridError, GridSink, GridSource};
pub use weighting_sheet::WeightingSheet;
