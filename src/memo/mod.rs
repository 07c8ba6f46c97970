// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable reference data.
//!
//! This module contains the data that never changes while analysing:
//! - RecordTable: smallest known delayed palindrome per iteration count
//! - classify: where a resolved run stands against that table

pub mod classify;
pub mod records;

pub use classify::{classify, Classification};
pub use records::{RecordEntry, RecordTable, KNOWN_RECORDS};
