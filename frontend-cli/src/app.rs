//! One pass of list → filter → confirm → kill.

use crate::cli::RunConfig;
use crate::error::Result;
use backend::{
    filter_processes, kill_all, Confirmer, KillReport, ProcError, ProcessKiller, ProcessLister,
    ProcessRecord, KILL_PROMPT,
};
use std::io::Write;
use tracing::{debug, info, warn};

/// Where a run ended up.
#[derive(Debug)]
pub enum RunOutcome {
    /// No pattern was given; only the usage hint was printed.
    MissingPattern,
    /// The process table could not be read; nothing was filtered or killed.
    EnumerationFailed(ProcError),
    /// Nothing matched, or the pattern did not compile.
    NoMatches,
    /// Dry run: these would have been killed.
    DryRun(Vec<ProcessRecord>),
    /// The operator answered anything other than `y`.
    Declined(Vec<ProcessRecord>),
    /// Kills were attempted for every match.
    Killed(KillReport),
}

/// The OS-facing collaborators a run needs.
pub struct Backends<'a, L: ?Sized, K: ?Sized, C: ?Sized> {
    pub lister: &'a L,
    pub killer: &'a K,
    pub confirmer: &'a mut C,
}

/// Execute a single run, writing all user-facing text to `out`.
///
/// Only a failure to write to `out` is returned as an error; every other
/// problem is reported on `out` and reflected in the outcome.
pub fn run<L, K, C, W>(
    config: &RunConfig,
    backends: Backends<'_, L, K, C>,
    out: &mut W,
) -> Result<RunOutcome>
where
    L: ProcessLister + ?Sized,
    K: ProcessKiller + ?Sized,
    C: Confirmer + ?Sized,
    W: Write,
{
    if let Err(e) = config.validate() {
        debug!("[{}] {}", e.code(), e);
        writeln!(out, "{}", e)?;
        return Ok(RunOutcome::MissingPattern);
    }

    let processes = match backends.lister.list_processes() {
        Ok(processes) => processes,
        Err(e) => {
            warn!("Process listing failed: {}", e);
            writeln!(out, "Error listing processes: {}", e)?;
            return Ok(RunOutcome::EnumerationFailed(e));
        }
    };

    let matched = filter_processes(&processes, &config.pattern, out)?;
    if matched.is_empty() {
        writeln!(out, "No matching processes found.")?;
        return Ok(RunOutcome::NoMatches);
    }

    if config.dry_run {
        writeln!(out, "Dry run mode. The following processes would be killed:")?;
        print_records(out, &matched)?;
        return Ok(RunOutcome::DryRun(matched));
    }

    writeln!(out, "The following processes match the regex:")?;
    print_records(out, &matched)?;
    out.flush()?;

    let confirmed = match backends.confirmer.confirm(KILL_PROMPT) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Could not read confirmation: {}", e);
            false
        }
    };
    debug!("Confirmation answer: {}", confirmed);

    if !confirmed {
        writeln!(out, "No processes were killed.")?;
        return Ok(RunOutcome::Declined(matched));
    }

    let report = kill_all(&matched, backends.killer, out)?;
    writeln!(
        out,
        "Killed {} of {} processes.",
        report.killed(),
        report.attempted()
    )?;
    info!(
        "Kill run finished: {} killed, {} failed",
        report.killed(),
        report.attempted() - report.killed()
    );
    Ok(RunOutcome::Killed(report))
}

fn print_records<W: Write>(out: &mut W, records: &[ProcessRecord]) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
