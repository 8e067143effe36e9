//! Data types and error definitions for process management.

use std::fmt;
use std::process::ExitStatus;
use thiserror::Error;

/// Represents a process entry as reported by the listing facility.
///
/// The PID is kept as text so that whatever the OS prints is passed back to
/// the killer unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: String,
    pub name: String,
}

impl ProcessRecord {
    /// Build a record, returning `None` when either field is empty.
    pub fn new(pid: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let pid = pid.into();
        let name = name.into();
        if pid.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { pid, name })
    }
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PID: {}, Name: {}", self.pid, self.name)
    }
}

/// Failure of an external command such as `ps` or `kill`.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Status {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" ({})", trimmed)
    }
}

/// Errors that can occur during process management.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("{0}")]
    Enumeration(#[source] CommandError),
    #[error("Invalid regex: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("{source}")]
    Termination {
        pid: String,
        #[source]
        source: CommandError,
    },
    #[error("Invalid PID: {0:?}")]
    InvalidPid(String),
    #[error("Failed to send signal to PID {0}: {1}")]
    SignalError(String, nix::errno::Errno),
    #[error("Procfs error: {0}")]
    ProcfsError(String),
}

impl From<procfs::ProcError> for ProcError {
    fn from(err: procfs::ProcError) -> Self {
        ProcError::ProcfsError(err.to_string())
    }
}
