//! Grid Adapters
//!
//! Implementations of the `GridSource` and `GridSink` ports.
//!
//! ## Available Adapters
//!
//! - **FileGrid** - Stores a grid as a YAML or JSON file on disk
//! - **InMemoryGrid** - Stores a grid in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::grid::{FileGrid, InMemoryGrid};
//!
//! // Local workbook stand-in
//! let grid = FileGrid::new("./data/helmet-coda.yaml")?;
//!
//! // Testing
//! let grid = InMemoryGrid::from_rows(rows)?;
//! ```

mod file_grid;
mod in_memory_grid;

pub use file_grid::{FileGrid, GridFormat};
pub use in_memory_grid::InMemoryGrid;
