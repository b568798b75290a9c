//! Sheet Adapters
//!
//! Implement the model ports on top of any grid backend.
//!
//! - **GridCodaSheet** - `CodaModelSource` for the Full, Compact and Collaborative layouts
//! - **GridWeightingSheet** - `WeightingSheet` backed by a readable, writable grid

mod grid_coda_sheet;
mod grid_weighting_sheet;

pub use grid_coda_sheet::GridCodaSheet;
pub use grid_weighting_sheet::GridWeightingSheet;
