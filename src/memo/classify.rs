// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compare a resolved run against the record table.

use super::records::RecordTable;
use crate::digits::DigitSequence;
use crate::engine::RaaResult;
use serde::Serialize;

/// Where a delayed palindrome stands relative to the known records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Needs more steps than any number in the table.
    WorldRecord { previous_record: Option<usize> },

    /// Smaller than the recorded number for its iteration count, or the
    /// first number known for that count.
    NewSmallest { previous: Option<DigitSequence> },

    /// Is the recorded number for its iteration count.
    MatchesSmallest {
        /// The entry is proven smallest, not just smallest found.
        proven: bool,
        /// The entry has the highest iteration count in the table.
        is_current_record: bool,
    },

    /// A delayed palindrome, but not a record.
    Ordinary { smallest_known: DigitSequence },

    /// The run did not reach a palindrome (or took no steps).
    NotApplicable,
}

/// Classify `result` against `records`.
pub fn classify(result: &RaaResult, records: &RecordTable) -> Classification {
    let steps = result.iteration_count;
    if !result.is_palindrome() || steps == 0 {
        return Classification::NotApplicable;
    }

    let highest = records.highest_iteration_count();
    if highest.map_or(true, |highest| steps > highest) {
        return Classification::WorldRecord {
            previous_record: highest,
        };
    }

    let number = &result.starting_number;
    match records.get(steps) {
        None => Classification::NewSmallest { previous: None },
        Some(entry) if *number < entry.number => Classification::NewSmallest {
            previous: Some(entry.number.clone()),
        },
        Some(entry) if *number == entry.number => Classification::MatchesSmallest {
            proven: entry.is_proven_smallest,
            is_current_record: Some(steps) == highest,
        },
        Some(entry) => Classification::Ordinary {
            smallest_known: entry.number.clone(),
        },
    }
}
