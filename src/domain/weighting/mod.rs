//! Binary weighting of requirements.
//!
//! Requirements are compared pairwise; each decision is recorded in the
//! upper triangle of a 0/1 matrix, and the matrix is reduced to a weight
//! per requirement.
//!
//! - `ComparisonMatrixValidator` - loads a sheet into a trusted matrix
//! - `ElicitationSession` - asks the pairwise questions
//! - `WeightingScorer` - turns decisions into normalized weights
//! - `BinaryWeightingMatrix` - ties the above to a weighting sheet

mod binary_matrix;
mod comparison_matrix;
mod elicitation;
mod errors;
mod scorer;
mod validator;

pub use binary_matrix::BinaryWeightingMatrix;
pub use comparison_matrix::ComparisonMatrix;
pub use elicitation::{
    canonical_decisions, Answer, AnswerOutcome, Decision, ElicitationSession, INTRO, RETRY,
};
pub use errors::WeightingError;
pub use scorer::{RequirementScore, WeightingScorer};
pub use validator::{ComparisonMatrixValidator, ValidatedSheet};
