// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cache statistics
//!
//! Counters live inside the cache and are bumped on every resolution. They are
//! atomic because one cache may serve several threads at once.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Resolved below the size threshold, without a lookup.
    FastPath,
    /// Lookup found a stored resolution.
    Hits,
    /// Lookup found nothing; iteration continued.
    Misses,
    /// A new resolution was stored.
    Inserts,
    /// Step ceiling reached without a palindrome.
    Unresolved,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug)]
pub struct CacheStatistics {
    stats: [AtomicU64; COUNT],
}

impl CacheStatistics {
    pub fn new() -> Self {
        Self {
            stats: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&self, counter: Counters) {
        self.stats[counter as usize].fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize].load(Ordering::Relaxed)
    }

    /// A point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            fast_path: self.get(Counters::FastPath),
            hits: self.get(Counters::Hits),
            misses: self.get(Counters::Misses),
            inserts: self.get(Counters::Inserts),
            unresolved: self.get(Counters::Unresolved),
        }
    }
}

impl Default for CacheStatistics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatisticsSnapshot {
    pub fast_path: u64,
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub unresolved: u64,
}

impl StatisticsSnapshot {
    /// Number of cache lookups performed.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}
