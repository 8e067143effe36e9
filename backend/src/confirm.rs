//! Yes/no confirmation before anything is killed.

use std::io::{self, BufRead, BufReader, Stdin, Write};
use tracing::debug;

pub const KILL_PROMPT: &str = "Do you want to kill these processes? (y/n): ";

/// Asks the operator whether to go ahead.
pub trait Confirmer {
    /// Show `prompt` and block until an answer is available.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Only a trimmed, case-insensitive `y` counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Prompts on a writer and reads one line from a reader.
///
/// End of input counts as "no".
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirmer<BufReader<Stdin>, io::Stdout> {
    /// Prompt on stdout and read the answer from stdin.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 {
            debug!("No confirmation received before end of input");
            // Keep the next output line off the prompt line.
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(is_affirmative(&answer))
    }
}
