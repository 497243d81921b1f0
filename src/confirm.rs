//! Yes/no confirmation for destructive operations.

use std::io::{self, BufRead, Write};

use crate::errors::SlackyError;

/// Marker an answer must contain to count as a yes.
pub const AFFIRMATIVE_MARKER: char = 'Y';

/// Asks the operator a question and reports whether they agreed.
pub trait Confirm {
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, prompt: &str) -> Result<bool, SlackyError>;
}

#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.contains(AFFIRMATIVE_MARKER)
}

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, SlackyError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Replays a fixed answer; lets callers script the prompt.
#[derive(Debug, Clone)]
pub struct FixedAnswer(pub String);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> Result<bool, SlackyError> {
        Ok(is_affirmative(&self.0))
    }
}
