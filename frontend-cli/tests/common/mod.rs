//! Scripted stand-ins for the OS-backed listers, killers and prompts.
#![allow(dead_code)]

use backend::{
    parse_listing, CommandError, Confirmer, ProcError, ProcessKiller, ProcessLister,
    ProcessRecord,
};
use std::cell::{Cell, RefCell};

pub const SAMPLE_TABLE: &str = "PID COMMAND\n12 sshd\n34 nginx\n56 nginx-worker\n";

/// Returns a fixed `ps`-style table, or an enumeration failure.
pub enum ScriptedLister {
    Table(&'static str),
    Fails,
}

impl ProcessLister for ScriptedLister {
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, ProcError> {
        match self {
            ScriptedLister::Table(text) => Ok(parse_listing(text)),
            ScriptedLister::Fails => Err(ProcError::Enumeration(CommandError::Spawn {
                command: "ps -e -o pid,comm".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "No such file or directory",
                ),
            })),
        }
    }
}

/// Records every PID it is asked to kill and fails for the listed ones.
#[derive(Default)]
pub struct RecordingKiller {
    pub calls: RefCell<Vec<String>>,
    pub failing: Vec<String>,
}

impl RecordingKiller {
    pub fn failing(pids: &[&str]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: pids.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ProcessKiller for RecordingKiller {
    fn kill(&self, pid: &str) -> Result<(), ProcError> {
        self.calls.borrow_mut().push(pid.to_string());
        if self.failing.iter().any(|p| p == pid) {
            return Err(ProcError::InvalidPid(pid.to_string()));
        }
        Ok(())
    }
}

/// Gives a fixed answer and counts how often it was asked.
pub struct ScriptedConfirmer {
    answer: std::io::Result<bool>,
    pub asked: Cell<usize>,
}

impl ScriptedConfirmer {
    pub fn answering(yes: bool) -> Self {
        Self {
            answer: Ok(yes),
            asked: Cell::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            answer: Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            asked: Cell::new(0),
        }
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, _prompt: &str) -> std::io::Result<bool> {
        self.asked.set(self.asked.get() + 1);
        match &self.answer {
            Ok(yes) => Ok(*yes),
            Err(e) => Err(std::io::Error::new(e.kind(), e.to_string())),
        }
    }
}
