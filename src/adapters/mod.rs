//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `grid` - Grid storage (YAML/JSON files, in-memory)
//! - `sheets` - CODA and weighting sheets over any grid
//! - `prompt` - Operator interaction (console, scripted)

pub mod grid;
pub mod prompt;
pub mod sheets;

pub use grid::{FileGrid, GridFormat, InMemoryGrid};
pub use prompt::{ScriptedPrompt, StdioPrompt};
pub use sheets::{GridCodaSheet, GridWeightingSheet};
