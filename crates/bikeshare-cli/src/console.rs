//! Line-oriented prompts with validation and quit handling.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use bikeshare_model::Domain;

use crate::error::{Result, SessionError};

/// Answers that end the session from any prompt (case-insensitive).
pub const QUIT_KEYWORDS: [&str; 5] = ["close", "cancel", "q", "exit", "quit"];

/// Printed after an answer that is not in the prompt's domain.
pub const TYPO_NOTICE: &str = "There must be a typo in your input.";

/// Returns true if the raw answer is a quit keyword.
pub fn is_quit_keyword(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    QUIT_KEYWORDS.contains(&normalized.as_str())
}

/// Prompt/answer channel of one session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one raw answer.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Quit`] when the answer is a quit keyword or
    /// the input is exhausted. Bytes that are not UTF-8 are replaced, so a
    /// malformed line fails validation instead of ending the session.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("input closed");
            return Err(SessionError::Quit);
        }
        let answer = String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        if is_quit_keyword(&answer) {
            info!("quit requested");
            return Err(SessionError::Quit);
        }
        Ok(answer)
    }

    /// Ask until the answer belongs to `domain` and return its resolved value.
    ///
    /// Lookup domains yield the canonical value of the matched alias,
    /// enumeration domains the matched token with a capitalized first
    /// character. Every mismatch prints [`TYPO_NOTICE`] and asks again, so
    /// callers must not pass an empty domain.
    pub fn choose(&mut self, domain: &Domain, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(value) = domain.resolve(&answer) {
                debug!(%value, "answer accepted");
                return Ok(value);
            }
            debug!(%answer, "answer rejected");
            self.say(TYPO_NOTICE)?;
        }
    }
}
