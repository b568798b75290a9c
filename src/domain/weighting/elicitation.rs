//! Pairwise elicitation.
//!
//! An `ElicitationSession` walks the upper triangle one decision at a time.
//! It is pull-based: callers fetch the pending decision, ask the operator
//! however they like, and feed the raw answer back.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::{ComparisonMatrix, WeightingError};

/// Intro shown before the first decision.
pub const INTRO: &str = "Please agree (y) or disagree (n) with the following statements:\n";

/// Shown after an answer that is neither `y` nor `n`.
pub const RETRY: &str = "Sorry I didn't understand...\n\n";

/// One pairwise question: is `this` more important than `other`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub i: usize,
    pub j: usize,
    pub this: String,
    pub other: String,
}

impl Decision {
    /// The question text put to the operator.
    pub fn question(&self) -> String {
        format!("'{}' is more important than '{}': ", self.this, self.other)
    }
}

/// An accepted answer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Agree,
    Disagree,
}

impl Answer {
    /// Parses an operator response. Only the exact tokens `y` and `n` are
    /// accepted.
    pub fn parse(response: &str) -> Option<Self> {
        match response {
            "y" => Some(Answer::Agree),
            "n" => Some(Answer::Disagree),
            _ => None,
        }
    }
}

/// Result of feeding one response into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was recorded and the session advanced.
    Accepted(Answer),
    /// The response was not understood; the same decision is still pending.
    Rejected,
    /// There was no pending decision.
    Complete,
}

/// Every `(i, j)` pair with `i < j`, in lexicographic order.
pub fn canonical_decisions(requirements: &[String]) -> Vec<Decision> {
    let n = requirements.len();
    let mut decisions = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            decisions.push(Decision {
                i,
                j,
                this: requirements[i].clone(),
                other: requirements[j].clone(),
            });
        }
    }
    decisions
}

/// State machine over the pending decisions of one matrix.
pub struct ElicitationSession<'a> {
    matrix: &'a mut ComparisonMatrix,
    decisions: Vec<Decision>,
    position: usize,
}

impl<'a> ElicitationSession<'a> {
    /// Session in canonical order.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the matrix size differs from the requirement count
    pub fn new(
        matrix: &'a mut ComparisonMatrix,
        requirements: &[String],
    ) -> Result<Self, WeightingError> {
        if matrix.size() != requirements.len() {
            return Err(WeightingError::DimensionMismatch {
                requirements: requirements.len(),
                matrix: matrix.size(),
            });
        }

        Ok(Self {
            matrix,
            decisions: canonical_decisions(requirements),
            position: 0,
        })
    }

    /// Session with the whole decision list permuted by `rng`.
    pub fn shuffled<R: Rng + ?Sized>(
        matrix: &'a mut ComparisonMatrix,
        requirements: &[String],
        rng: &mut R,
    ) -> Result<Self, WeightingError> {
        let mut session = Self::new(matrix, requirements)?;
        session.decisions.shuffle(rng);
        Ok(session)
    }

    /// The decision awaiting an answer.
    pub fn current(&self) -> Option<&Decision> {
        self.decisions.get(self.position)
    }

    /// Decisions not yet answered.
    pub fn remaining(&self) -> usize {
        self.decisions.len() - self.position
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.decisions.len()
    }

    /// Records `response` against the pending decision.
    ///
    /// `y` sets the cell to 1, `n` sets it to 0. The mirrored cell is never
    /// written.
    pub fn answer(&mut self, response: &str) -> Result<AnswerOutcome, WeightingError> {
        let Some(decision) = self.decisions.get(self.position) else {
            return Ok(AnswerOutcome::Complete);
        };

        let Some(answer) = Answer::parse(response) else {
            trace!(response = %response, "Response not understood");
            return Ok(AnswerOutcome::Rejected);
        };

        let (i, j) = (decision.i, decision.j);
        self.matrix.record(i, j, answer == Answer::Agree)?;
        trace!(i, j, ?answer, "Decision recorded");

        self.position += 1;
        Ok(AnswerOutcome::Accepted(answer))
    }

    /// Ends the session, returning the matrix it was filling in.
    pub fn finish(self) -> &'a ComparisonMatrix {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reqs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn canonical_order_is_lexicographic() {
        let decisions = canonical_decisions(&reqs(&["A", "B", "C"]));
        let pairs: Vec<(usize, usize)> = decisions.iter().map(|d| (d.i, d.j)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn question_text_quotes_both_requirements() {
        let decisions = canonical_decisions(&reqs(&["Requirement 1", "Requirement 2"]));
        assert_eq!(
            decisions[0].question(),
            "'Requirement 1' is more important than 'Requirement 2': "
        );
    }

    #[test]
    fn answer_accepts_only_y_and_n() {
        assert_eq!(Answer::parse("y"), Some(Answer::Agree));
        assert_eq!(Answer::parse("n"), Some(Answer::Disagree));
        assert_eq!(Answer::parse(""), None);
        assert_eq!(Answer::parse(" y"), None);
        assert_eq!(Answer::parse("n "), None);
        assert_eq!(Answer::parse("yn"), None);
        assert_eq!(Answer::parse("Y"), None);
        assert_eq!(Answer::parse("yes"), None);
    }

    #[test]
    fn rejected_answer_does_not_advance() {
        let requirements = reqs(&["A", "B"]);
        let mut matrix = ComparisonMatrix::zeros(2);
        let mut session = ElicitationSession::new(&mut matrix, &requirements).unwrap();

        assert_eq!(session.answer("maybe").unwrap(), AnswerOutcome::Rejected);
        assert_eq!(session.current().map(|d| (d.i, d.j)), Some((0, 1)));
        assert_eq!(session.remaining(), 1);

        assert_eq!(session.answer("y").unwrap(), AnswerOutcome::Accepted(Answer::Agree));
        assert!(session.is_complete());
        assert_eq!(session.answer("y").unwrap(), AnswerOutcome::Complete);

        let matrix = session.finish();
        assert_eq!(matrix.rows(), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn disagree_never_writes_the_mirrored_cell() {
        let requirements = reqs(&["A", "B", "C"]);
        let mut matrix = ComparisonMatrix::zeros(3);
        let mut session = ElicitationSession::new(&mut matrix, &requirements).unwrap();
        while !session.is_complete() {
            session.answer("n").unwrap();
        }
        assert!(session.finish().is_zero());
    }

    #[test]
    fn shuffled_session_covers_every_pair_once() {
        let requirements = reqs(&["A", "B", "C", "D", "E"]);
        let mut matrix = ComparisonMatrix::zeros(5);
        let mut rng = StdRng::seed_from_u64(7);
        let mut session =
            ElicitationSession::shuffled(&mut matrix, &requirements, &mut rng).unwrap();

        let mut seen = Vec::new();
        while let Some(decision) = session.current().cloned() {
            seen.push((decision.i, decision.j));
            session.answer("y").unwrap();
        }
        seen.sort();

        let expected: Vec<(usize, usize)> = canonical_decisions(&requirements)
            .iter()
            .map(|d| (d.i, d.j))
            .collect();
        assert_eq!(seen, expected);

        // Every upper cell is 1 regardless of order.
        let matrix = session.finish();
        assert_eq!(matrix.row_sums(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn empty_requirement_set_is_complete_immediately() {
        let mut matrix = ComparisonMatrix::zeros(0);
        let session = ElicitationSession::new(&mut matrix, &[]).unwrap();
        assert!(session.is_complete());
        assert!(session.current().is_none());
    }

    #[test]
    fn matrix_smaller_than_requirement_list_is_rejected() {
        let requirements = reqs(&["A", "B", "C"]);
        let mut matrix = ComparisonMatrix::zeros(2);

        let result = ElicitationSession::new(&mut matrix, &requirements);
        assert!(matches!(
            result,
            Err(WeightingError::DimensionMismatch {
                requirements: 3,
                matrix: 2
            })
        ));

        let mut rng = StdRng::seed_from_u64(1);
        let shuffled = ElicitationSession::shuffled(&mut matrix, &requirements, &mut rng);
        assert!(matches!(
            shuffled,
            Err(WeightingError::DimensionMismatch { .. })
        ));
    }
}
