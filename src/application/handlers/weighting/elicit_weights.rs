//! ElicitWeightsHandler - Command handler that runs pairwise elicitation and saves the result.

use tracing::info;

use super::WeightingReport;
use crate::domain::foundation::DomainError;
use crate::domain::weighting::BinaryWeightingMatrix;
use crate::ports::{DecisionPrompt, WeightingSheet};

/// Handler for filling in a weighting sheet interactively.
pub struct ElicitWeightsHandler<W> {
    sheet: W,
    shuffle: bool,
}

impl<W: WeightingSheet + 'static> ElicitWeightsHandler<W> {
    /// Creates a handler that asks questions in random order.
    pub fn new(sheet: W) -> Self {
        Self {
            sheet,
            shuffle: true,
        }
    }

    /// Sets whether the question order is randomized.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Hydrates the matrix, asks every decision, saves and scores.
    pub fn handle(self, prompt: &mut dyn DecisionPrompt) -> Result<WeightingReport, DomainError> {
        let mut matrix = BinaryWeightingMatrix::from_sheet(self.sheet)?;
        matrix.prompt(prompt, self.shuffle)?;
        matrix.save()?;

        let report = WeightingReport::from_matrix(&matrix)?;
        info!(
            label = %report.label,
            requirements = report.scores.len(),
            "Elicited requirement weights"
        );

        Ok(report)
    }
}
