//! Thin wrapper around `std::process::Command` for the external facilities.

use crate::types::CommandError;
use std::process::{Command, Output};
use tracing::debug;

/// A program plus its fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub(crate) fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the command with `extra` appended, returning its output on a zero exit.
    pub(crate) fn run(&self, extra: &[&str]) -> Result<Output, CommandError> {
        let command_line = self.display_with(extra);
        debug!("Running {}", command_line);

        let output = Command::new(&self.program)
            .args(&self.args)
            .args(extra)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Status {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output)
    }

    fn display_with(&self, extra: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(extra.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
