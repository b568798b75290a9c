//! File-based Grid Adapter
//!
//! Stores a grid as a YAML or JSON list of rows. The format follows the file
//! extension. Cells may be strings, numbers, booleans or null; everything is
//! read back as text.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::{CellRef, Grid};
use crate::ports::{GridError, GridSink, GridSource};

/// Serialization format of a grid file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Yaml,
    Json,
}

impl GridFormat {
    /// Format for a path, by extension
    pub fn from_path(path: &Path) -> Result<Self, GridError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(GridFormat::Yaml),
            Some("json") => Ok(GridFormat::Json),
            _ => Err(GridError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A scalar cell as it appears in the file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl RawCell {
    fn into_text(self) -> String {
        match self {
            RawCell::Text(s) => s,
            RawCell::Integer(i) => i.to_string(),
            RawCell::Float(f) => f.to_string(),
            RawCell::Bool(b) => b.to_string(),
            RawCell::Null => String::new(),
        }
    }
}

/// File-based grid storage
#[derive(Debug, Clone)]
pub struct FileGrid {
    path: PathBuf,
    format: GridFormat,
}

impl FileGrid {
    /// Open a grid file, choosing the format from its extension
    ///
    /// The file need not exist yet; it is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref().to_path_buf();
        let format = GridFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> GridFormat {
        self.format
    }

    /// Read the stored cells without trimming
    fn load(&self) -> Result<Grid, GridError> {
        if !self.path.exists() {
            return Err(GridError::NotFound(self.path.display().to_string()));
        }

        let text =
            fs::read_to_string(&self.path).map_err(|e| GridError::IoError(e.to_string()))?;

        let raw: Vec<Vec<RawCell>> = match self.format {
            GridFormat::Yaml => serde_yaml::from_str(&text)
                .map_err(|e| GridError::DeserializationFailed(e.to_string()))?,
            GridFormat::Json => serde_json::from_str(&text)
                .map_err(|e| GridError::DeserializationFailed(e.to_string()))?,
        };

        let rows = raw
            .into_iter()
            .map(|row| row.into_iter().map(RawCell::into_text).collect::<Vec<_>>());
        Ok(Grid::from_rows(rows)?)
    }

    fn store(&self, grid: &Grid) -> Result<(), GridError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| GridError::IoError(e.to_string()))?;
            }
        }

        let text = match self.format {
            GridFormat::Yaml => serde_yaml::to_string(grid)
                .map_err(|e| GridError::SerializationFailed(e.to_string()))?,
            GridFormat::Json => serde_json::to_string_pretty(grid)
                .map_err(|e| GridError::SerializationFailed(e.to_string()))?,
        };

        fs::write(&self.path, text).map_err(|e| GridError::IoError(e.to_string()))
    }
}

impl GridSource for FileGrid {
    fn read_grid(&self) -> Result<Grid, GridError> {
        Ok(self.load()?.trimmed())
    }
}

impl GridSink for FileGrid {
    fn write_grid(&mut self, grid: &Grid, anchor: CellRef) -> Result<(), GridError> {
        let mut existing = match self.load() {
            Ok(existing) => existing,
            Err(GridError::NotFound(_)) => Grid::empty(),
            Err(e) => return Err(e),
        };

        existing.write_at(grid, anchor);
        self.store(&existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        TempDir::new().unwrap()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            GridFormat::from_path(Path::new("sheet.yaml")).unwrap(),
            GridFormat::Yaml
        );
        assert_eq!(
            GridFormat::from_path(Path::new("sheet.YML")).unwrap(),
            GridFormat::Yaml
        );
        assert_eq!(
            GridFormat::from_path(Path::new("sheet.json")).unwrap(),
            GridFormat::Json
        );
        assert!(matches!(
            GridFormat::from_path(Path::new("sheet.xlsx")),
            Err(GridError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = setup();
        let grid = FileGrid::new(dir.path().join("missing.yaml")).unwrap();
        assert!(matches!(grid.read_grid(), Err(GridError::NotFound(_))));
    }

    #[test]
    fn test_read_yaml_with_mixed_scalars() {
        let dir = setup();
        let path = dir.path().join("coda.yaml");
        fs::write(
            &path,
            "- [Helmet, Weight, 12.5, ~]\n- ['', 1, true, '']\n- ['', '', '', '']\n",
        )
        .unwrap();

        let grid = FileGrid::new(&path).unwrap().read_grid().unwrap();

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cell(0, 2), "12.5");
        assert_eq!(grid.cell(1, 1), "1");
        assert_eq!(grid.cell(1, 2), "true");
    }

    #[test]
    fn test_read_json() {
        let dir = setup();
        let path = dir.path().join("matrix.json");
        fs::write(&path, r#"[["", "A", "B"], ["A", "", 1], ["B", null, ""]]"#).unwrap();

        let grid = FileGrid::new(&path).unwrap().read_grid().unwrap();

        assert_eq!(grid.cell(0, 1), "A");
        assert_eq!(grid.cell(1, 2), "1");
        assert_eq!(grid.cell(2, 1), "");
    }

    #[test]
    fn test_read_ragged_file() {
        let dir = setup();
        let path = dir.path().join("ragged.json");
        fs::write(&path, r#"[["a", "b"], ["c"]]"#).unwrap();

        let result = FileGrid::new(&path).unwrap().read_grid();
        assert!(matches!(result, Err(GridError::Ragged { row: 1, .. })));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = setup();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not a grid").unwrap();

        let result = FileGrid::new(&path).unwrap().read_grid();
        assert!(matches!(result, Err(GridError::DeserializationFailed(_))));
    }

    #[test]
    fn test_write_creates_file_and_directories() {
        let dir = setup();
        let path = dir.path().join("nested").join("weights.yaml");
        let mut storage = FileGrid::new(&path).unwrap();

        let block = Grid::from_rows(vec![vec!["", "A"], vec!["A", "0"]]).unwrap();
        storage.write_grid(&block, CellRef::ORIGIN).unwrap();

        assert!(path.exists());
        let grid = storage.read_grid().unwrap();
        assert_eq!(grid, block.trimmed());
    }

    #[test]
    fn test_write_at_anchor_preserves_surrounding_cells() {
        let dir = setup();
        let path = dir.path().join("weights.json");
        fs::write(&path, r#"[["note", "x"], ["y", "z"]]"#).unwrap();

        let mut storage = FileGrid::new(&path).unwrap();
        let block = Grid::from_rows(vec![vec!["1", "2"]]).unwrap();
        storage.write_grid(&block, CellRef::new(1, 1)).unwrap();

        let grid = storage.read_grid().unwrap();
        assert_eq!(grid.cell(0, 0), "note");
        assert_eq!(grid.cell(1, 0), "y");
        assert_eq!(grid.cell(1, 1), "1");
        assert_eq!(grid.cell(1, 2), "2");
    }
}
