//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (grids, cell references, errors)
//! - `coda` - Requirements model types and tabular extraction
//! - `weighting` - Binary weighting matrix validation, elicitation and scoring

pub mod coda;
pub mod foundation;
pub mod weighting;
