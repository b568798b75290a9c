//! Scripted prompt adapter.
//!
//! Replays a fixed list of answers. Useful for testing and for batch runs
//! where decisions were collected elsewhere.

use std::collections::VecDeque;

use crate::ports::{DecisionPrompt, PromptError};

/// Prompt that answers from a script and records the conversation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
    shown: Vec<String>,
    answered: usize,
}

impl ScriptedPrompt {
    /// Create a prompt that replays `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every question asked, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Every message shown, in order
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionPrompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.asked.push(question.to_string());
        let answer = self
            .answers
            .pop_front()
            .ok_or(PromptError::Exhausted(self.answered))?;
        self.answered += 1;
        Ok(answer)
    }

    fn show(&mut self, message: &str) -> Result<(), PromptError> {
        self.shown.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_answers_and_records_questions() {
        let mut prompt = ScriptedPrompt::new(["y", "n"]);

        assert_eq!(prompt.ask("q1").unwrap(), "y");
        assert_eq!(prompt.ask("q2").unwrap(), "n");
        prompt.show("done").unwrap();

        assert_eq!(prompt.asked(), &["q1".to_string(), "q2".to_string()]);
        assert_eq!(prompt.shown(), &["done".to_string()]);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn reports_exhaustion_with_answer_count() {
        let mut prompt = ScriptedPrompt::new(["y"]);
        prompt.ask("q1").unwrap();

        let err = prompt.ask("q2").unwrap_err();
        assert!(matches!(err, PromptError::Exhausted(1)));
    }
}
