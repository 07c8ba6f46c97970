// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! palcheck entry point: all logic lives in `lychrel_check::cli`.

use lychrel_check::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
