//! Weighting Scorer - Turns a comparison matrix into normalized weights.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{ComparisonMatrix, WeightingError};

/// A requirement paired with its normalized weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementScore {
    pub requirement: String,
    pub score: f64,
}

impl RequirementScore {
    /// Creates a new requirement score.
    pub fn new(requirement: impl Into<String>, score: f64) -> Self {
        Self {
            requirement: requirement.into(),
            score,
        }
    }
}

/// Binary weighting score functions.
pub struct WeightingScorer;

impl WeightingScorer {
    /// Decisions won outright: `wins[i] = Σ_j M[i][j]`.
    pub fn wins(matrix: &ComparisonMatrix) -> Vec<u32> {
        matrix.row_sums()
    }

    /// Decisions won by the other side of a pair: `implied[j] = Σ_{i<j} (1 - M[i][j])`.
    pub fn implied_wins(matrix: &ComparisonMatrix) -> Vec<u32> {
        let n = matrix.size();
        (0..n)
            .map(|j| (0..j).map(|i| 1 - u32::from(matrix.get(i, j))).sum())
            .collect()
    }

    /// Biased totals: `wins + implied + 1`.
    ///
    /// The `+1` keeps a requirement that lost every comparison above zero.
    /// The totals always sum to `N(N+1)/2`.
    pub fn biased(matrix: &ComparisonMatrix) -> Vec<u32> {
        Self::wins(matrix)
            .into_iter()
            .zip(Self::implied_wins(matrix))
            .map(|(won, implied)| won + implied + 1)
            .collect()
    }

    /// Normalized weights summing to one.
    ///
    /// # Errors
    /// - `EmptyModel` when the matrix covers no requirements
    pub fn score(matrix: &ComparisonMatrix) -> Result<Vec<f64>, WeightingError> {
        if matrix.size() == 0 {
            return Err(WeightingError::EmptyModel);
        }

        let biased = Self::biased(matrix);
        let total: u32 = biased.iter().sum();

        Ok(biased
            .into_iter()
            .map(|b| f64::from(b) / f64::from(total))
            .collect())
    }

    /// Pairs requirements with scores, highest first.
    ///
    /// Ties keep requirement order.
    pub fn ranked(requirements: &[String], scores: &[f64]) -> Vec<RequirementScore> {
        let mut ranked: Vec<RequirementScore> = requirements
            .iter()
            .zip(scores)
            .map(|(r, &s)| RequirementScore::new(r.clone(), s))
            .collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }
}
