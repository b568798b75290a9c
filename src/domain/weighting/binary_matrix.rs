//! Binary weighting matrix aggregate.

use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use super::elicitation::{AnswerOutcome, ElicitationSession, INTRO, RETRY};
use super::{
    ComparisonMatrix, ComparisonMatrixValidator, RequirementScore, WeightingError,
    WeightingScorer,
};
use crate::domain::foundation::Grid;
use crate::ports::{DecisionPrompt, WeightingSheet};

/// Requirements plus their pairwise comparison matrix.
///
/// A matrix hydrated with [`from_sheet`](Self::from_sheet) remembers the
/// sheet so that [`save`](Self::save) can write the decisions back.
pub struct BinaryWeightingMatrix {
    label: String,
    requirements: Vec<String>,
    matrix: ComparisonMatrix,
    sheet: Option<Box<dyn WeightingSheet>>,
}

impl BinaryWeightingMatrix {
    /// Creates an unanswered matrix for the given requirements.
    ///
    /// # Errors
    /// - `DuplicateRequirement` if a requirement appears twice
    pub fn new<I, S>(requirements: I) -> Result<Self, WeightingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requirements: Vec<String> = requirements.into_iter().map(Into::into).collect();
        let matrix = ComparisonMatrix::zeros(requirements.len());
        Self::with_matrix(requirements, matrix)
    }

    /// Creates a matrix with previously recorded decisions.
    ///
    /// # Errors
    /// - `DuplicateRequirement` if a requirement appears twice
    /// - `DimensionMismatch` if the matrix size differs from the requirement count
    pub fn with_matrix(
        requirements: Vec<String>,
        matrix: ComparisonMatrix,
    ) -> Result<Self, WeightingError> {
        ComparisonMatrixValidator::check_unique(&requirements)?;
        if matrix.size() != requirements.len() {
            return Err(WeightingError::DimensionMismatch {
                requirements: requirements.len(),
                matrix: matrix.size(),
            });
        }

        Ok(Self {
            label: String::new(),
            requirements,
            matrix,
            sheet: None,
        })
    }

    /// Sets the label written to the header corner by [`to_grid`](Self::to_grid).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Hydrates from a weighting sheet and keeps it for [`save`](Self::save).
    pub fn from_sheet<W>(sheet: W) -> Result<Self, WeightingError>
    where
        W: WeightingSheet + 'static,
    {
        let requirements = sheet.get_requirements()?;
        let matrix = sheet.get_value_matrix()?;
        let label = sheet.get_label()?;

        let mut hydrated = Self::with_matrix(requirements, matrix)?.with_label(label);
        hydrated.sheet = Some(Box::new(sheet));

        debug!(
            label = %hydrated.label,
            requirements = hydrated.requirements.len(),
            "Hydrated weighting matrix from sheet"
        );
        Ok(hydrated)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    /// A copy of the comparison matrix.
    pub fn matrix(&self) -> ComparisonMatrix {
        self.matrix.clone()
    }

    /// Returns true if the matrix was hydrated from a sheet.
    pub fn has_sheet(&self) -> bool {
        self.sheet.is_some()
    }

    /// Normalized requirement weights, in requirement order.
    pub fn score(&self) -> Result<Vec<f64>, WeightingError> {
        let scores = WeightingScorer::score(&self.matrix)?;
        debug!(requirements = scores.len(), "Computed binary weighting scores");
        Ok(scores)
    }

    /// Requirements paired with their weights, highest first.
    pub fn ranked(&self) -> Result<Vec<RequirementScore>, WeightingError> {
        let scores = self.score()?;
        Ok(WeightingScorer::ranked(&self.requirements, &scores))
    }

    /// Renders the matrix with requirement headers on both axes.
    pub fn to_grid(&self) -> Grid {
        let header = std::iter::once(self.label.clone()).chain(self.requirements.iter().cloned());

        let n = self.requirements.len();
        let body = self.requirements.iter().enumerate().map(|(i, requirement)| {
            std::iter::once(requirement.clone())
                .chain((0..n).map(move |j| self.matrix.get(i, j).to_string()))
                .collect::<Vec<String>>()
        });

        Grid::padded(std::iter::once(header.collect::<Vec<String>>()).chain(body))
    }

    /// Asks the operator every pairwise decision.
    ///
    /// With `shuffle`, the decision order is randomized.
    pub fn prompt(
        &mut self,
        prompt: &mut dyn DecisionPrompt,
        shuffle: bool,
    ) -> Result<(), WeightingError> {
        if shuffle {
            return self.prompt_with_rng(prompt, &mut rand::thread_rng());
        }
        let session = ElicitationSession::new(&mut self.matrix, &self.requirements)?;
        Self::drive(session, prompt)
    }

    /// Asks every pairwise decision in an order shuffled by `rng`.
    pub fn prompt_with_rng<R: Rng + ?Sized>(
        &mut self,
        prompt: &mut dyn DecisionPrompt,
        rng: &mut R,
    ) -> Result<(), WeightingError> {
        let session = ElicitationSession::shuffled(&mut self.matrix, &self.requirements, rng)?;
        Self::drive(session, prompt)
    }

    fn drive(
        mut session: ElicitationSession<'_>,
        prompt: &mut dyn DecisionPrompt,
    ) -> Result<(), WeightingError> {
        prompt.show(INTRO)?;

        while let Some(decision) = session.current() {
            let question = decision.question();
            let response = prompt.ask(&question)?;
            if session.answer(&response)? == AnswerOutcome::Rejected {
                prompt.show(RETRY)?;
            }
        }

        Ok(())
    }

    /// Writes the matrix back to the sheet it was hydrated from.
    ///
    /// # Errors
    /// - `UnsupportedSource` if the matrix was not created from a sheet
    pub fn save(&mut self) -> Result<(), WeightingError> {
        let grid = self.to_grid();
        let sheet = self.sheet.as_mut().ok_or_else(|| {
            WeightingError::UnsupportedSource(
                "Saving is only supported for matrices created from a weighting sheet".to_string(),
            )
        })?;

        sheet.update(&grid)?;
        info!(
            label = %self.label,
            requirements = self.requirements.len(),
            "Saved weighting matrix"
        );
        Ok(())
    }
}

impl fmt::Debug for BinaryWeightingMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryWeightingMatrix")
            .field("label", &self.label)
            .field("requirements", &self.requirements)
            .field("matrix", &self.matrix)
            .field("has_sheet", &self.sheet.is_some())
            .finish()
    }
}
