//! Square 0/1 matrix of pairwise preferences.

use serde::Serialize;

use super::WeightingError;
use crate::domain::foundation::CellRef;

/// N×N matrix of pairwise decisions.
///
/// Only the strict upper triangle carries information: `get(i, j) == 1`
/// for `i < j` means requirement `i` was judged more important than
/// requirement `j`. The diagonal and lower triangle are always zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<Vec<u8>>")]
pub struct ComparisonMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl ComparisonMatrix {
    /// An all-zero matrix of the given size.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a matrix from nested rows, enforcing the upper-triangle invariant.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, WeightingError> {
        let size = rows.len();
        let mut matrix = Self::zeros(size);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(WeightingError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                match (value, i < j) {
                    (0, _) => {}
                    (1, true) => matrix.cells[i * size + j] = 1,
                    (1, false) => {
                        return Err(WeightingError::LowerTriangleNotEmpty {
                            cell: header_cell(i, j),
                        })
                    }
                    (other, _) => {
                        return Err(WeightingError::InvalidValue {
                            cell: header_cell(i, j),
                            value: other.to_string(),
                        })
                    }
                }
            }
        }

        Ok(matrix)
    }

    /// Number of requirements the matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value; zero outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        if i < self.size && j < self.size {
            self.cells[i * self.size + j]
        } else {
            0
        }
    }

    /// Returns true if no decision has been recorded as a preference.
    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Records the decision for the pair `(i, j)`.
    pub(crate) fn record(&mut self, i: usize, j: usize, preferred: bool) -> Result<(), WeightingError> {
        if i >= j || j >= self.size {
            return Err(WeightingError::InvalidDecision {
                i,
                j,
                size: self.size,
            });
        }
        self.cells[i * self.size + j] = u8::from(preferred);
        Ok(())
    }

    /// Copies the matrix out as nested rows.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[u8]>::to_vec).collect()
    }

    /// Row sums: how many pairwise decisions each requirement won.
    pub fn row_sums(&self) -> Vec<u32> {
        (0..self.size)
            .map(|i| (0..self.size).map(|j| u32::from(self.get(i, j))).sum())
            .collect()
    }
}

impl From<ComparisonMatrix> for Vec<Vec<u8>> {
    fn from(matrix: ComparisonMatrix) -> Self {
        matrix.rows()
    }
}

/// Sheet cell of matrix entry `(i, j)`, allowing for the header row and column.
pub(crate) fn header_cell(i: usize, j: usize) -> CellRef {
    CellRef::new(i + 1, j + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_no_preferences() {
        let m = ComparisonMatrix::zeros(3);
        assert_eq!(m.size(), 3);
        assert!(m.is_zero());
        assert_eq!(m.rows(), vec![vec![0, 0, 0]; 3]);
    }

    #[test]
    fn record_only_accepts_upper_triangle() {
        let mut m = ComparisonMatrix::zeros(3);
        assert!(m.record(0, 2, true).is_ok());
        assert_eq!(m.get(0, 2), 1);

        assert!(matches!(
            m.record(1, 1, true),
            Err(WeightingError::InvalidDecision { .. })
        ));
        assert!(matches!(
            m.record(2, 0, true),
            Err(WeightingError::InvalidDecision { .. })
        ));
        assert!(matches!(
            m.record(1, 3, true),
            Err(WeightingError::InvalidDecision { .. })
        ));
    }

    #[test]
    fn record_can_overwrite_a_decision() {
        let mut m = ComparisonMatrix::zeros(2);
        m.record(0, 1, true).unwrap();
        m.record(0, 1, false).unwrap();
        assert!(m.is_zero());
    }

    #[test]
    fn from_rows_rejects_lower_triangle_ones() {
        let result = ComparisonMatrix::from_rows(vec![vec![0, 0], vec![1, 0]]);
        assert!(matches!(
            result,
            Err(WeightingError::LowerTriangleNotEmpty { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_values_other_than_zero_or_one() {
        let result = ComparisonMatrix::from_rows(vec![vec![0, 2], vec![0, 0]]);
        assert!(matches!(result, Err(WeightingError::InvalidValue { .. })));
    }

    #[test]
    fn from_rows_rejects_non_square_input() {
        let result = ComparisonMatrix::from_rows(vec![vec![0, 1, 0], vec![0, 0, 0]]);
        assert!(matches!(result, Err(WeightingError::NotSquare { .. })));
    }

    #[test]
    fn row_sums_count_wins() {
        let m = ComparisonMatrix::from_rows(vec![
            vec![0, 1, 1],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(m.row_sums(), vec![2, 0, 0]);
    }

    #[test]
    fn get_outside_matrix_is_zero() {
        let m = ComparisonMatrix::zeros(2);
        assert_eq!(m.get(5, 5), 0);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let m = ComparisonMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0,1],[0,0]]");
    }
}
