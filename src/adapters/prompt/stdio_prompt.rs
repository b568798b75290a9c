//! Console prompt adapter.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::ports::{DecisionPrompt, PromptError};

/// Asks questions on a line-oriented reader/writer pair.
///
/// Questions are written without a trailing newline so the operator answers
/// on the same line. Messages are written as whole lines.
#[derive(Debug)]
pub struct StdioPrompt<R, W> {
    input: R,
    output: W,
}

impl StdioPrompt<io::StdinLock<'static>, Stdout> {
    /// A prompt on the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompt, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> DecisionPrompt for StdioPrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question).map_err(|e| PromptError::IoError(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| PromptError::IoError(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        if read == 0 {
            return Err(PromptError::Closed);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(answer.to_string())
    }

    fn show(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message).map_err(|e| PromptError::IoError(e.to_string()))
    }
}
