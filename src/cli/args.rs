// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line arguments for `palcheck`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// palcheck - delayed palindrome and Lychrel candidate checker
#[derive(Parser, Debug)]
#[command(name = "palcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run reverse-and-add on a number and report the result
    Check {
        /// The number; commas, apostrophes and spaces are ignored
        number: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// JSON file with analysis options
        #[arg(long)]
        config: Option<PathBuf>,

        /// Step budget for numbers below the size threshold
        #[arg(long)]
        small_limit: Option<usize>,

        /// Step budget for numbers at or above the size threshold
        #[arg(long)]
        large_limit: Option<usize>,

        /// Number of iterations to print when no palindrome is reached
        #[arg(long, default_value_t = 30)]
        show_steps: usize,
    },

    /// Show the kin class of a number
    Kin {
        number: String,

        #[arg(long)]
        json: bool,
    },

    /// Re-check the known records table through the resolution cache
    Records {
        /// First iteration count to check
        #[arg(long, default_value_t = 1)]
        from: usize,

        /// Last iteration count to check
        #[arg(long)]
        to: Option<usize>,

        /// Digit count at which the cache is consulted
        #[arg(long)]
        threshold: Option<usize>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["palcheck", "check", "1,000", "--json", "--large-limit", "900"])
            .unwrap();
        match cli.command {
            Command::Check {
                number,
                json,
                large_limit,
                show_steps,
                ..
            } => {
                assert_eq!(number, "1,000");
                assert!(json);
                assert_eq!(large_limit, Some(900));
                assert_eq!(show_steps, 30);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_defaults() {
        let cli = Cli::try_parse_from(["palcheck", "-v", "records"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Records {
                from: 1,
                to: None,
                threshold: None
            }
        ));
    }
}
