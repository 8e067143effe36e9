//! `kp`: list processes, pick the ones whose name matches a regex, and kill
//! them after asking.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;

pub use app::{run, Backends, RunOutcome};
pub use cli::{Cli, RunConfig};
pub use error::{CliError, Result};
