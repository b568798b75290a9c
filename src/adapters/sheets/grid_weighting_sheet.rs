//! Weighting sheet over any readable and writable grid.

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::domain::foundation::{CellRef, Grid};
use crate::domain::weighting::{
    ComparisonMatrix, ComparisonMatrixValidator, ValidatedSheet, WeightingError,
};
use crate::ports::{GridSink, GridSource, WeightingSheet};

/// A binary weighting matrix stored in a grid.
///
/// The matrix's header corner sits at `anchor`; cells above and to the left
/// of it are ignored. The grid is read and validated once. `update` writes
/// through to the backend but does not refresh the cached view.
pub struct GridWeightingSheet<S> {
    store: S,
    anchor: CellRef,
    validated: OnceCell<ValidatedSheet>,
}

impl<S: GridSource + GridSink> GridWeightingSheet<S> {
    /// A sheet whose header corner is at A1.
    pub fn new(store: S) -> Self {
        Self::with_anchor(store, CellRef::ORIGIN)
    }

    /// A sheet whose header corner is at `anchor`.
    pub fn with_anchor(store: S, anchor: CellRef) -> Self {
        Self {
            store,
            anchor,
            validated: OnceCell::new(),
        }
    }

    pub fn anchor(&self) -> CellRef {
        self.anchor
    }

    fn validated(&self) -> Result<&ValidatedSheet, WeightingError> {
        self.validated.get_or_try_init(|| {
            let grid = self.store.read_grid()?.region_from(self.anchor).trimmed();
            debug!(
                anchor = %self.anchor,
                rows = grid.height(),
                cols = grid.width(),
                "Fetched weighting grid"
            );
            ComparisonMatrixValidator::validate(&grid)
        })
    }
}

impl<S: GridSource + GridSink> WeightingSheet for GridWeightingSheet<S> {
    fn is_valid(&self) -> bool {
        self.validated().is_ok()
    }

    fn get_label(&self) -> Result<String, WeightingError> {
        Ok(self.validated()?.label.clone())
    }

    fn get_requirements(&self) -> Result<Vec<String>, WeightingError> {
        Ok(self.validated()?.requirements.clone())
    }

    fn get_value_matrix(&self) -> Result<ComparisonMatrix, WeightingError> {
        Ok(self.validated()?.matrix.clone())
    }

    fn update(&mut self, grid: &Grid) -> Result<(), WeightingError> {
        self.store.write_grid(grid, self.anchor)?;
        debug!(anchor = %self.anchor, "Wrote weighting grid");
        Ok(())
    }
}
