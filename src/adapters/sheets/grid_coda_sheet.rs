//! CODA sheet over any grid source.

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::domain::coda::{
    CharacteristicDef, CodaLayout, ExtractionError, Relationship, RequirementDef,
    TabularModelExtractor,
};
use crate::domain::foundation::Grid;
use crate::ports::{CodaModelSource, GridSource};

/// Reads a CODA model from a grid laid out as `layout`.
///
/// The grid is fetched once, on first use, and every derived list is cached
/// alongside it. Nothing is invalidated; build a new sheet to re-read.
pub struct GridCodaSheet<S> {
    source: S,
    layout: CodaLayout,
    grid: OnceCell<Grid>,
    characteristics: OnceCell<Vec<CharacteristicDef>>,
    requirements: OnceCell<Vec<RequirementDef>>,
    relationships: OnceCell<Vec<Relationship>>,
}

impl<S: GridSource> GridCodaSheet<S> {
    pub fn new(source: S, layout: CodaLayout) -> Self {
        Self {
            source,
            layout,
            grid: OnceCell::new(),
            characteristics: OnceCell::new(),
            requirements: OnceCell::new(),
            relationships: OnceCell::new(),
        }
    }

    pub fn layout(&self) -> CodaLayout {
        self.layout
    }

    fn extractor(&self) -> Result<TabularModelExtractor, ExtractionError> {
        TabularModelExtractor::for_layout(self.layout)
    }

    fn grid(&self) -> Result<&Grid, ExtractionError> {
        self.grid.get_or_try_init(|| {
            let grid = self.source.read_grid()?;
            debug!(
                layout = %self.layout,
                rows = grid.height(),
                cols = grid.width(),
                "Fetched CODA grid"
            );
            Ok(grid)
        })
    }

    fn cached_characteristics(&self) -> Result<&Vec<CharacteristicDef>, ExtractionError> {
        self.characteristics.get_or_try_init(|| {
            let extractor = self.extractor()?;
            Ok(extractor.characteristics(self.grid()?))
        })
    }

    fn cached_requirements(&self) -> Result<&Vec<RequirementDef>, ExtractionError> {
        self.requirements.get_or_try_init(|| {
            let extractor = self.extractor()?;
            extractor.requirements(self.grid()?)
        })
    }
}

impl<S: GridSource> CodaModelSource for GridCodaSheet<S> {
    fn is_valid(&self) -> bool {
        self.layout.spec().is_some() && self.get_relationships().is_ok()
    }

    fn get_characteristics(&self) -> Result<Vec<CharacteristicDef>, ExtractionError> {
        self.cached_characteristics().cloned()
    }

    fn get_requirements(&self) -> Result<Vec<RequirementDef>, ExtractionError> {
        self.cached_requirements().cloned()
    }

    fn get_relationships(&self) -> Result<Vec<Relationship>, ExtractionError> {
        self.relationships
            .get_or_try_init(|| {
                let extractor = self.extractor()?;
                let requirements = self.cached_requirements()?;
                let characteristics = self.cached_characteristics()?;
                extractor.relationships(self.grid()?, requirements, characteristics)
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::grid::InMemoryGrid;
    use crate::domain::coda::RelationshipType;
    use crate::ports::GridError;
    use std::cell::Cell;

    /// Counts reads so memoization can be observed.
    struct CountingSource {
        inner: InMemoryGrid,
        reads: Cell<usize>,
    }

    impl GridSource for CountingSource {
        fn read_grid(&self) -> Result<Grid, GridError> {
            self.reads.set(self.reads.get() + 1);
            self.inner.read_grid()
        }
    }

    fn compact_rows() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Helmet", "", "Mass", "", "", "Cost", "", ""],
            vec!["", "", "", "0.5", "3", "", "50", "500"],
            vec![
                "Requirements",
                "Weighting",
                "Relationship Type",
                "Target",
                "Tolerance",
                "Relationship Type",
                "Target",
                "Tolerance",
            ],
            vec!["Light", "0.6", "-0.9", "1.2", "", "", "", ""],
            vec!["Cheap", "0.4", "", "", "", "o0.8", "150", "25"],
        ]
    }

    fn sheet() -> (GridCodaSheet<CountingSource>, InMemoryGrid) {
        let grid = InMemoryGrid::from_rows(compact_rows()).unwrap();
        let source = CountingSource {
            inner: grid.clone(),
            reads: Cell::new(0),
        };
        (GridCodaSheet::new(source, CodaLayout::Compact), grid)
    }

    #[test]
    fn extracts_compact_model() {
        let (sheet, _) = sheet();
        let model = sheet.get_model().unwrap();

        assert_eq!(model.characteristics.len(), 2);
        assert_eq!(model.characteristics[0].name, "Mass");
        assert_eq!(model.characteristics[0].min, Some(0.5));
        assert_eq!(model.characteristics[0].max, Some(3.0));

        assert_eq!(model.requirements.len(), 2);
        assert_eq!(model.requirements[1].name, "Cheap");

        assert_eq!(model.relationships.len(), 2);
        assert_eq!(
            model.relationships[0].relationship_type(),
            Some(RelationshipType::Min)
        );
        assert_eq!(
            model.relationships[1].relationship_type(),
            Some(RelationshipType::Opt)
        );
        assert!(sheet.is_valid());
    }

    #[test]
    fn grid_is_read_once() {
        let (sheet, _) = sheet();

        sheet.get_characteristics().unwrap();
        sheet.get_requirements().unwrap();
        sheet.get_relationships().unwrap();
        sheet.get_model().unwrap();

        assert_eq!(sheet.source.reads.get(), 1);
    }

    #[test]
    fn cached_results_ignore_later_source_changes() {
        let (sheet, mut grid) = sheet();
        let before = sheet.get_requirements().unwrap();

        let block = Grid::from_rows(vec![vec!["Renamed"]]).unwrap();
        crate::ports::GridSink::write_grid(
            &mut grid,
            &block,
            crate::domain::foundation::CellRef::new(3, 0),
        )
        .unwrap();

        assert_eq!(sheet.get_requirements().unwrap(), before);
    }

    #[test]
    fn collaborative_layout_is_unsupported() {
        let grid = InMemoryGrid::from_rows(compact_rows()).unwrap();
        let sheet = GridCodaSheet::new(grid, CodaLayout::Collaborative);

        assert!(!sheet.is_valid());
        assert!(matches!(
            sheet.get_characteristics(),
            Err(ExtractionError::UnsupportedSource { .. })
        ));
        assert!(matches!(
            sheet.get_model(),
            Err(ExtractionError::UnsupportedSource { .. })
        ));
    }

    #[test]
    fn missing_columns_make_sheet_invalid() {
        let grid = InMemoryGrid::from_rows(vec![vec!["Helmet", "", "Mass"], vec!["", "", ""]])
            .unwrap();
        let sheet = GridCodaSheet::new(grid, CodaLayout::Full);

        assert!(!sheet.is_valid());
        assert!(matches!(
            sheet.get_requirements(),
            Err(ExtractionError::MissingColumn { .. })
        ));
    }
}
