//! ScoreRequirementsHandler - Query handler that scores a stored weighting matrix.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::weighting::{BinaryWeightingMatrix, RequirementScore, WeightingScorer};
use crate::ports::WeightingSheet;

/// Normalized weights for one weighting sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingReport {
    pub label: String,
    /// Scores in requirement order.
    pub scores: Vec<RequirementScore>,
}

impl WeightingReport {
    /// Builds a report from a hydrated matrix.
    pub fn from_matrix(matrix: &BinaryWeightingMatrix) -> Result<Self, DomainError> {
        let scores = matrix.score()?;
        Ok(Self {
            label: matrix.label().to_string(),
            scores: matrix
                .requirements()
                .iter()
                .zip(scores)
                .map(|(requirement, score)| RequirementScore::new(requirement.clone(), score))
                .collect(),
        })
    }

    /// Scores sorted from most to least important.
    pub fn ranked(&self) -> Vec<RequirementScore> {
        let requirements: Vec<String> =
            self.scores.iter().map(|s| s.requirement.clone()).collect();
        let scores: Vec<f64> = self.scores.iter().map(|s| s.score).collect();
        WeightingScorer::ranked(&requirements, &scores)
    }
}

/// Handler for scoring a weighting sheet without changing it.
pub struct ScoreRequirementsHandler<W> {
    sheet: W,
}

impl<W: WeightingSheet + 'static> ScoreRequirementsHandler<W> {
    pub fn new(sheet: W) -> Self {
        Self { sheet }
    }

    pub fn handle(self) -> Result<WeightingReport, DomainError> {
        let matrix = BinaryWeightingMatrix::from_sheet(self.sheet)?;
        let report = WeightingReport::from_matrix(&matrix)?;

        info!(
            label = %report.label,
            requirements = report.scores.len(),
            "Scored weighting sheet"
        );

        Ok(report)
    }
}
