use backend::{CommandKiller, LineConfirmer, PsLister};
use clap::Parser;
use kp::{logging, run, Backends, Cli, RunConfig};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Only fails if a subscriber is already installed
    let _ = logging::init_tracing("warn");

    let config = RunConfig::from(cli);
    let lister = PsLister::new();
    let killer = CommandKiller::new();
    let mut confirmer = LineConfirmer::stdio();
    let backends = Backends {
        lister: &lister,
        killer: &killer,
        confirmer: &mut confirmer,
    };

    match run(&config, backends, &mut io::stdout()) {
        Ok(outcome) => {
            debug!("Run finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("[{}] {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}
