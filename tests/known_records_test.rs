// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known records test - every entry of the built-in table must resolve in
//! exactly its recorded iteration count.
//!
//! The table runs from 1 to 293 iterations, with numbers up to 26 digits.
//! Each entry is checked twice: once by running the engine directly (with
//! every step kept), once through a shared resolution cache.

mod common;

use common::{cache_with_threshold, seq};
use lychrel_check::engine::run;
use lychrel_check::{
    analyze, classify, AnalyzeOptions, Analyzer, CacheConfig, Classification, RecordTable,
};

#[test]
fn test_every_record_resolves_directly() {
    let table = RecordTable::known();
    for entry in table.iter() {
        let result = run(&entry.number, 600, None);
        assert!(result.is_palindrome(), "entry {}", entry.iteration_count);
        assert_eq!(
            result.iteration_count, entry.iteration_count,
            "entry {} ({})",
            entry.iteration_count, entry.number
        );
        assert!(result.resultant.is_palindrome());
    }
}

#[test]
fn test_every_record_classifies_as_itself() {
    let table = RecordTable::known();
    let highest = table.highest_iteration_count().unwrap();
    for entry in table.iter() {
        let result = run(&entry.number, 600, Some(0));
        assert_eq!(
            classify(&result, &table),
            Classification::MatchesSmallest {
                proven: entry.is_proven_smallest,
                is_current_record: entry.iteration_count == highest,
            },
            "entry {}",
            entry.iteration_count
        );
    }
}

#[test]
fn test_records_through_shared_cache() {
    let analyzer = Analyzer::new(AnalyzeOptions::default(), CacheConfig::default());
    let verification = analyzer.verify_records(..);
    assert_eq!(verification.checks.len(), analyzer.records().len());
    assert!(
        verification.all_match(),
        "mismatches: {:?}",
        verification.mismatches().collect::<Vec<_>>()
    );

    // A second pass over the long entries can only hit, never change answers.
    let again = analyzer.verify_records(150..);
    assert!(again.all_match());
    assert!(again.statistics.hits > verification.statistics.hits);
}

#[test]
fn test_records_with_low_threshold_share_tails() {
    // The five-digit records and their highest kin share every state from
    // the first step on, so both runs look up the same six-digit key.
    let cache = cache_with_threshold(6);
    let table = RecordTable::known();
    for entry in table.range(25..=55).filter(|entry| entry.number.len() == 5) {
        let highest = lychrel_check::kin::highest_kin(&entry.number);
        let direct = cache.resolve(&entry.number);
        let kin = cache.resolve(&highest);
        assert_eq!(direct.iteration_count, entry.iteration_count);
        assert_eq!(kin.iteration_count, entry.iteration_count);
        assert_eq!(kin.resultant, direct.resultant);
    }
    assert!(cache.statistics().snapshot().hits > 0);
}

#[test]
fn test_documented_scenarios() {
    let options = AnalyzeOptions::default();

    let r89 = analyze("89", &options).unwrap();
    assert_eq!(r89.iteration_count, 24);
    assert!(r89.is_palindrome());

    let r10911 = analyze("10911", &options).unwrap();
    assert_eq!(r10911.iteration_count, 55);
    assert!(r10911.is_palindrome());
    assert_eq!(r10911.resultant, seq("4668731596684224866951378664"));

    let r59 = analyze("59", &options).unwrap();
    assert_eq!(r59.iteration_count, 3);
    assert_eq!(r59.resultant, seq("1111"));
}
