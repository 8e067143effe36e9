//! Process listing functionality.

use crate::command::CommandLine;
use crate::types::{ProcError, ProcessRecord};
use tracing::{debug, warn};

/// Source of the current process table.
pub trait ProcessLister {
    /// Enumerate processes in the order the OS reports them.
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, ProcError>;
}

/// Lists processes by running `ps -e -o pid,comm` and parsing its table.
#[derive(Debug, Clone)]
pub struct PsLister {
    command: CommandLine,
}

impl Default for PsLister {
    fn default() -> Self {
        Self {
            command: CommandLine::new("ps", ["-e", "-o", "pid,comm"]),
        }
    }
}

impl PsLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another program whose output has the same `PID NAME` table shape.
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: CommandLine::new(program, args),
        }
    }
}

impl ProcessLister for PsLister {
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, ProcError> {
        let output = self.command.run(&[]).map_err(ProcError::Enumeration)?;
        let records = parse_listing(&String::from_utf8_lossy(&output.stdout));
        debug!("Listed {} processes", records.len());
        Ok(records)
    }
}

/// Parse a `ps`-style table: the first line is a header, every following line
/// with at least two whitespace-separated fields yields `(pid, name)`.
/// Anything shorter is skipped.
pub fn parse_listing(text: &str) -> Vec<ProcessRecord> {
    text.lines()
        .skip(1)
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let pid = fields.next()?;
            let name = fields.next()?;
            ProcessRecord::new(pid, name)
        })
        .collect()
}

/// Lists processes straight from `/proc` using `procfs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcfsLister;

impl ProcessLister for ProcfsLister {
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, ProcError> {
        let mut processes = Vec::new();

        for proc_result in procfs::process::all_processes()? {
            // Processes can exit between the directory scan and the stat read.
            let stat = match proc_result.and_then(|p| p.stat()) {
                Ok(stat) => stat,
                Err(e) => {
                    warn!("Skipping unreadable process entry: {}", e);
                    continue;
                }
            };
            if let Some(record) = ProcessRecord::new(stat.pid.to_string(), stat.comm) {
                processes.push(record);
            }
        }

        debug!("Listed {} processes from /proc", processes.len());
        Ok(processes)
    }
}
