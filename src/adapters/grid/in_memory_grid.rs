//! In-Memory Grid Adapter
//!
//! Keeps a grid in memory. Clones share the same cells, so a test can hand
//! one clone to a sheet and inspect writes through another.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::foundation::{CellRef, Grid, RaggedGridError};
use crate::ports::{GridError, GridSink, GridSource};

/// In-memory grid storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryGrid {
    cells: Rc<RefCell<Grid>>,
}

impl InMemoryGrid {
    /// Create storage holding `grid`
    pub fn new(grid: Grid) -> Self {
        Self {
            cells: Rc::new(RefCell::new(grid)),
        }
    }

    /// Create storage from raw rows, rejecting ragged input
    pub fn from_rows<R, C>(rows: R) -> Result<Self, RaggedGridError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Grid::from_rows(rows).map(Self::new)
    }

    /// Snapshot of the stored cells, untrimmed
    pub fn snapshot(&self) -> Grid {
        self.cells.borrow().clone()
    }
}

impl GridSource for InMemoryGrid {
    fn read_grid(&self) -> Result<Grid, GridError> {
        Ok(self.cells.borrow().clone().trimmed())
    }
}

impl GridSink for InMemoryGrid {
    fn write_grid(&mut self, grid: &Grid, anchor: CellRef) -> Result<(), GridError> {
        self.cells.borrow_mut().write_at(grid, anchor);
        Ok(())
    }
}
