// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Delayed palindrome analysis over arbitrary-precision decimal numbers.
//!
//! Repeatedly adding a number to its own digit reversal ("reverse and add")
//! turns most numbers into a palindrome within a few steps. Some take
//! hundreds of steps (delayed palindromes); some, like 196, have never been
//! seen to resolve (Lychrel candidates).
//!
//! # Architecture
//!
//! Modules, from leaf to root:
//!
//! - **digits**: `DigitSequence`, the immutable digit value type, with
//!   `reverse_and_add` and `is_palindrome`
//! - **kin**: canonical (lowest) and highest numbers sharing a first step,
//!   and the size of that class
//! - **engine**: the reverse-and-add state machine, run under a step budget
//! - **cache**: memo of resolved intermediate states, shared across runs
//! - **memo**: the table of smallest known delayed palindromes and the
//!   classification of a result against it
//! - **context**: `Analyzer`, tying options, records and cache together
//!
//! # Non-termination
//!
//! No number has been proven to never reach a palindrome. A run that uses its
//! whole budget ends in `Outcome::BudgetExhausted`, which says exactly that
//! and nothing stronger.
//!
//! # Example
//!
//! ```
//! use lychrel_check::{analyze, classify, AnalyzeOptions, Classification, RecordTable};
//!
//! let result = analyze("10,911", &AnalyzeOptions::default()).unwrap();
//! assert!(result.is_palindrome());
//! assert_eq!(result.iteration_count, 55);
//!
//! let records = RecordTable::known();
//! assert!(matches!(
//!     classify(&result, &records),
//!     Classification::MatchesSmallest { proven: true, .. }
//! ));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod context;
pub mod digits;
pub mod engine;
pub mod errors;
pub mod kin;
pub mod memo;

// Re-export commonly used types
pub use cache::{PalindromeCache, Resolution};
pub use config::{AnalyzeOptions, CacheConfig};
pub use context::{analyze, kin_info, Analyzer, Report};
pub use digits::DigitSequence;
pub use engine::{Outcome, RaaIterator, RaaResult, RaaState};
pub use errors::{InvalidReason, PalError, PalResult};
pub use kin::{KinCount, KinInfo};
pub use memo::{classify, Classification, RecordEntry, RecordTable};
