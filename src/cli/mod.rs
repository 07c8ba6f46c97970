// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `palcheck` command line front end.
//!
//! The binary only parses arguments, installs logging and calls [`run`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use crate::errors::PalResult;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over
/// the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse the process arguments and execute the command.
pub fn run() -> PalResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, &mut out)
}
