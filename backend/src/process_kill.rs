//! Process killing functionality.

use crate::command::CommandLine;
use crate::types::{ProcError, ProcessRecord};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::io::Write;
use tracing::{info, warn};

/// Something that can ask the OS to terminate a single process.
pub trait ProcessKiller {
    /// Send the default termination signal to `pid`.
    fn kill(&self, pid: &str) -> Result<(), ProcError>;
}

/// Kills by running `kill <pid>`.
#[derive(Debug, Clone)]
pub struct CommandKiller {
    command: CommandLine,
}

impl Default for CommandKiller {
    fn default() -> Self {
        Self::with_program("kill")
    }
}

impl CommandKiller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another program that takes the PID as its last argument.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            command: CommandLine::new(program, Vec::<String>::new()),
        }
    }
}

impl ProcessKiller for CommandKiller {
    fn kill(&self, pid: &str) -> Result<(), ProcError> {
        self.command
            .run(&[pid])
            .map(|_| ())
            .map_err(|source| ProcError::Termination {
                pid: pid.to_string(),
                source,
            })
    }
}

/// Kills by sending SIGTERM directly with `kill(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalKiller;

impl ProcessKiller for SignalKiller {
    fn kill(&self, pid: &str) -> Result<(), ProcError> {
        let raw: i32 = pid
            .trim()
            .parse()
            .map_err(|_| ProcError::InvalidPid(pid.to_string()))?;
        // 0 and negative values address process groups, not a single process.
        if raw <= 0 {
            return Err(ProcError::InvalidPid(pid.to_string()));
        }

        signal::kill(Pid::from_raw(raw), Signal::SIGTERM)
            .map_err(|e| ProcError::SignalError(pid.to_string(), e))
    }
}

/// Result of one kill attempt.
#[derive(Debug)]
pub struct KillOutcome {
    pub record: ProcessRecord,
    pub result: Result<(), ProcError>,
}

/// Per-record results of [`kill_all`], in the order attempted.
#[derive(Debug, Default)]
pub struct KillReport {
    pub outcomes: Vec<KillOutcome>,
}

impl KillReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn killed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &KillOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Kill every record in order, one at a time, writing progress to `out`.
///
/// A failed kill is reported and the next record is still attempted.
pub fn kill_all<K, W>(
    records: &[ProcessRecord],
    killer: &K,
    out: &mut W,
) -> std::io::Result<KillReport>
where
    K: ProcessKiller + ?Sized,
    W: Write,
{
    let mut report = KillReport::default();

    for record in records {
        writeln!(out, "Killing process PID: {}, Name: {}", record.pid, record.name)?;
        let result = killer.kill(&record.pid);
        match &result {
            Ok(()) => {
                info!("Killed PID {} ({})", record.pid, record.name);
                writeln!(out, "Killed process PID: {}", record.pid)?;
            }
            Err(e) => {
                warn!("Failed to kill PID {}: {}", record.pid, e);
                writeln!(out, "Failed to kill process PID: {}, error: {}", record.pid, e)?;
            }
        }
        report.outcomes.push(KillOutcome {
            record: record.clone(),
            result,
        });
    }

    Ok(report)
}
