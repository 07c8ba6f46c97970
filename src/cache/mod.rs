// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Palindrome resolution cache.
//!
//! Many starting numbers merge into the same intermediate value after a few
//! steps (every kin class shares its first step, for a start). Once a run's
//! state is long enough that iterating is expensive, the cache remembers
//! where that state ends up, so a later run reaching the same state can stop
//! there.
//!
//! # Resolution
//!
//! 1. Fast path: iterate while the state is shorter than `threshold_digits`,
//!    returning as soon as a palindrome appears
//! 2. Look up the first state at or above the threshold (the key)
//! 3. On a hit, finish immediately from the stored entry
//! 4. On a miss, keep iterating up to `step_ceiling` total steps; on success
//!    store the key's resolution
//!
//! Only observed palindromes are stored. A run that hits the ceiling stores
//! nothing, since it is not a confirmed fact about the key.
//!
//! # Sharing
//!
//! The cache is an explicit value passed by reference; create one per process
//! (or per test). Entries are never evicted. Lookups take a read lock and
//! inserts a write lock. Two threads resolving the same key at once both
//! iterate and both insert the same value, so the last write wins harmlessly.

pub mod statistics;

pub use statistics::{CacheStatistics, Counters, StatisticsSnapshot};

use crate::config::CacheConfig;
use crate::digits::DigitSequence;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Where a cached key ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The palindrome reached from the key.
    pub resultant: DigitSequence,
    /// Steps from the key to the palindrome.
    pub additional_steps: usize,
}

/// Outcome of [`PalindromeCache::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub is_palindrome: bool,
    /// The palindrome, or the last state computed before the ceiling.
    pub resultant: DigitSequence,
    /// Total steps from the starting number.
    pub iteration_count: usize,
    /// True if the answer came from a stored entry.
    pub from_cache: bool,
}

/// Process-wide memo of resolved intermediate states.
#[derive(Debug)]
pub struct PalindromeCache {
    config: CacheConfig,
    entries: RwLock<HashMap<DigitSequence, CacheEntry>>,
    statistics: CacheStatistics,
}

impl PalindromeCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            statistics: CacheStatistics::new(),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn statistics(&self) -> &CacheStatistics {
        &self.statistics
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// The stored entry for `key`, if any.
    pub fn get(&self, key: &DigitSequence) -> Option<CacheEntry> {
        self.entries.read().get(key).cloned()
    }

    /// Iterate from `start` until a palindrome or the step ceiling.
    pub fn resolve(&self, start: &DigitSequence) -> Resolution {
        let CacheConfig {
            threshold_digits,
            step_ceiling,
        } = self.config;

        let mut current = start.clone();
        let mut iteration = 0;

        while current.len() < threshold_digits && iteration < step_ceiling {
            current = current.reverse_and_add();
            iteration += 1;
            if current.is_palindrome() {
                self.statistics.increment_counter(Counters::FastPath);
                return Resolution {
                    is_palindrome: true,
                    resultant: current,
                    iteration_count: iteration,
                    from_cache: false,
                };
            }
        }

        if iteration >= step_ceiling {
            return self.unresolved(start, current, iteration);
        }

        let key = current.clone();
        let key_iteration = iteration;

        if let Some(entry) = self.get(&key) {
            self.statistics.increment_counter(Counters::Hits);
            debug!(start = %start, key_digits = key.len(), "palindrome cache hit");
            return Resolution {
                is_palindrome: true,
                resultant: entry.resultant,
                iteration_count: key_iteration + entry.additional_steps,
                from_cache: true,
            };
        }
        self.statistics.increment_counter(Counters::Misses);

        while iteration < step_ceiling {
            current = current.reverse_and_add();
            iteration += 1;
            if current.is_palindrome() {
                let entry = CacheEntry {
                    resultant: current.clone(),
                    additional_steps: iteration - key_iteration,
                };
                self.entries.write().insert(key, entry);
                self.statistics.increment_counter(Counters::Inserts);
                debug!(start = %start, iterations = iteration, "palindrome cache insert");
                return Resolution {
                    is_palindrome: true,
                    resultant: current,
                    iteration_count: iteration,
                    from_cache: false,
                };
            }
        }

        self.unresolved(start, current, iteration)
    }

    fn unresolved(&self, start: &DigitSequence, last: DigitSequence, iteration: usize) -> Resolution {
        self.statistics.increment_counter(Counters::Unresolved);
        debug!(start = %start, iterations = iteration, "step ceiling reached, nothing cached");
        Resolution {
            is_palindrome: false,
            resultant: last,
            iteration_count: iteration,
            from_cache: false,
        }
    }
}

impl Default for PalindromeCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
