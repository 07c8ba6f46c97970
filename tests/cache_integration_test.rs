// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the palindrome resolution cache.

mod common;

use common::{cache_with_threshold, seq};
use lychrel_check::cache::Counters;
use lychrel_check::engine::run;
use lychrel_check::{CacheConfig, DigitSequence, PalindromeCache};

#[test]
fn test_repeat_resolution_hits() {
    let cache = cache_with_threshold(6);
    let start = seq("10911");
    let first = cache.resolve(&start);
    let second = cache.resolve(&start);

    assert_eq!(first.is_palindrome, second.is_palindrome);
    assert_eq!(first.resultant, second.resultant);
    assert_eq!(first.iteration_count, 55);
    assert_eq!(second.iteration_count, 55);
    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(cache.statistics().get(Counters::Hits), 1);
    assert_eq!(cache.statistics().get(Counters::Misses), 1);
    assert_eq!(cache.statistics().get(Counters::Inserts), 1);
}

#[test]
fn test_caches_are_isolated() {
    let a = cache_with_threshold(3);
    let b = cache_with_threshold(3);
    a.resolve(&seq("89"));
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
    assert!(!b.resolve(&seq("89")).from_cache);
}

#[test]
fn test_only_palindromes_are_stored() {
    let cache = PalindromeCache::new(CacheConfig {
        threshold_digits: 4,
        step_ceiling: 60,
    });
    for n in [196u64, 295, 394, 689, 879, 887, 1675] {
        let resolution = cache.resolve(&DigitSequence::from_u64(n));
        assert!(!resolution.is_palindrome, "n = {}", n);
    }
    assert!(cache.is_empty());
    assert_eq!(cache.statistics().get(Counters::Unresolved), 7);
}

#[test]
fn test_every_entry_is_a_confirmed_palindrome() {
    let cache = cache_with_threshold(4);
    for n in 1u64..2000 {
        cache.resolve(&DigitSequence::from_u64(n));
    }
    assert!(!cache.is_empty());
    for n in 1000u64..2000 {
        let key = DigitSequence::from_u64(n);
        if let Some(entry) = cache.get(&key) {
            assert!(entry.resultant.is_palindrome());
            let direct = run(&key, entry.additional_steps, Some(0));
            assert!(direct.is_palindrome());
            assert_eq!(direct.resultant, entry.resultant);
            assert_eq!(direct.iteration_count, entry.additional_steps);
        }
    }
}

#[test]
fn test_concurrent_resolution_is_consistent() {
    let cache = cache_with_threshold(5);
    let starts: Vec<DigitSequence> = (10u64..400).map(DigitSequence::from_u64).collect();

    let results: Vec<Vec<_>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| starts.iter().map(|s| cache.resolve(s)).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, start) in starts.iter().enumerate() {
        let direct = run(start, 500, Some(0));
        for per_thread in &results {
            assert_eq!(per_thread[i].is_palindrome, direct.is_palindrome(), "start {}", start);
            assert_eq!(per_thread[i].resultant, direct.resultant, "start {}", start);
            assert_eq!(per_thread[i].iteration_count, direct.iteration_count, "start {}", start);
        }
    }
}
