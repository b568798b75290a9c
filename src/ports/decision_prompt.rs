//! Decision Prompt Port - Operator interaction during elicitation.
//!
//! The elicitation protocol asks one question at a time and blocks for a
//! free-text answer. Console adapters talk to a terminal; scripted adapters
//! replay a fixed answer sequence in tests.

/// Errors that can occur while talking to the operator.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Input closed before all decisions were answered")]
    Closed,

    #[error("Scripted answers exhausted after {0} responses")]
    Exhausted(usize),
}

/// Port for asking the operator questions and showing messages.
pub trait DecisionPrompt {
    /// Show `question` and return the operator's raw response.
    ///
    /// The response is returned without its line terminator; callers decide
    /// whether it is acceptable.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;

    /// Show an informational message.
    fn show(&mut self, message: &str) -> Result<(), PromptError>;
}

impl<T: DecisionPrompt + ?Sized> DecisionPrompt for &mut T {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        (**self).ask(question)
    }

    fn show(&mut self, message: &str) -> Result<(), PromptError> {
        (**self).show(message)
    }
}
