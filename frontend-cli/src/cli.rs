//! Command-line flags.

use crate::error::{CliError, Result};
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "kp")]
#[command(about = "A CLI to kill processes by regex")]
#[command(version)]
pub struct Cli {
    /// Regex to match process names
    #[arg(short = 'p', long = "process-name", default_value = "")]
    pub process_name: String,

    /// Dry run mode, do not kill processes
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,
}

/// Settings for a single run, fixed once flags are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub pattern: String,
    pub dry_run: bool,
}

impl RunConfig {
    /// A run needs a non-empty pattern; anything else is left to the regex engine.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(CliError::MissingPattern);
        }
        Ok(())
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            pattern: cli.process_name,
            dry_run: cli.dry_run,
        }
    }
}
