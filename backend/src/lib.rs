//! UI-agnostic process management library for Linux.
//!
//! Provides process listing (via `ps` or `/proc`), regex name filtering,
//! confirmation prompts, and sequential killing (via `kill` or `kill(2)`).
//! Listing, killing and confirming sit behind traits so callers can swap in
//! their own implementations.

mod command;
mod confirm;
mod process_filter;
mod process_kill;
mod process_list;
mod types;

pub use confirm::{is_affirmative, Confirmer, LineConfirmer, KILL_PROMPT};
pub use process_filter::{filter_processes, NameFilter};
pub use process_kill::{
    kill_all, CommandKiller, KillOutcome, KillReport, ProcessKiller, SignalKiller,
};
pub use process_list::{parse_listing, ProcessLister, ProcfsLister, PsLister};
pub use types::{CommandError, ProcError, ProcessRecord};
