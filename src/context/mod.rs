// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Analysis context combining reference data and the shared cache.
//!
//! The Analyzer is the data structure a front end holds for the lifetime of
//! the process:
//! - Immutable: options and the known record table
//! - Shared, append-only: the palindrome resolution cache
//!
//! The free functions [`analyze`] and [`kin_info`] are the same operations
//! without a context, for one-off use.

use crate::cache::{PalindromeCache, Resolution, StatisticsSnapshot};
use crate::config::{AnalyzeOptions, CacheConfig, DEFAULT_MAX_INPUT_DIGITS};
use crate::digits::DigitSequence;
use crate::engine::{self, RaaResult};
use crate::errors::{InvalidReason, PalError, PalResult};
use crate::kin::{self, KinInfo};
use crate::memo::{classify, Classification, RecordTable};
use serde::Serialize;
use std::ops::RangeBounds;
use tracing::info;

/// Parse `text` as a natural number within the accepted length.
pub fn parse_natural(text: &str, max_digits: usize) -> PalResult<DigitSequence> {
    let number = DigitSequence::parse(text)?;
    if number.is_zero() {
        return Err(PalError::invalid(text, InvalidReason::NotNatural));
    }
    if number.len() > max_digits {
        return Err(PalError::invalid(
            text,
            InvalidReason::TooLong {
                digits: number.len(),
                max: max_digits,
            },
        ));
    }
    Ok(number)
}

/// Run reverse-and-add on `text` with a budget chosen by its length.
pub fn analyze(text: &str, options: &AnalyzeOptions) -> PalResult<RaaResult> {
    let start = parse_natural(text, options.max_input_digits)?;
    let budget = options.step_budget(start.len());
    let result = engine::run(&start, budget, options.step_display_limit);
    if !result.is_palindrome() {
        info!(
            start = %start,
            budget,
            resultant_digits = result.resultant.len(),
            "no palindrome within step budget"
        );
    }
    Ok(result)
}

/// Kin class summary of `text`, accepting up to the default input length.
pub fn kin_info(text: &str) -> PalResult<KinInfo> {
    let number = parse_natural(text, DEFAULT_MAX_INPUT_DIGITS)?;
    Ok(KinInfo::of(&number))
}

/// Everything known about one starting number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub result: RaaResult,
    pub kin: KinInfo,
    pub classification: Classification,
    /// The starting number is itself a palindrome.
    pub start_is_palindrome: bool,
    /// The starting number is the lowest of its kin.
    pub is_canonical: bool,
    /// Canonical form of the first step, for runs that resolved in more
    /// than one step. Any number with this first step resolves one step
    /// later than it does.
    pub first_step_canonical: Option<DigitSequence>,
}

/// Result of checking one record entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCheck {
    pub iteration_count: usize,
    pub number: DigitSequence,
    pub resolution: Resolution,
}

impl RecordCheck {
    /// The entry resolves in exactly its recorded iteration count.
    pub fn matches(&self) -> bool {
        self.resolution.is_palindrome && self.resolution.iteration_count == self.iteration_count
    }
}

/// Result of resolving a range of record entries through the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordVerification {
    pub checks: Vec<RecordCheck>,
    pub statistics: StatisticsSnapshot,
}

impl RecordVerification {
    pub fn all_match(&self) -> bool {
        self.checks.iter().all(RecordCheck::matches)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &RecordCheck> {
        self.checks.iter().filter(|check| !check.matches())
    }
}

/// Long-lived analysis context.
#[derive(Debug)]
pub struct Analyzer {
    options: AnalyzeOptions,
    records: RecordTable,
    cache: PalindromeCache,
}

impl Analyzer {
    /// Create an analyzer with the built-in record table.
    pub fn new(options: AnalyzeOptions, cache_config: CacheConfig) -> Self {
        Self::with_records(options, cache_config, RecordTable::known())
    }

    /// Create an analyzer with an explicit record table.
    pub fn with_records(
        options: AnalyzeOptions,
        cache_config: CacheConfig,
        records: RecordTable,
    ) -> Self {
        Self {
            options,
            records,
            cache: PalindromeCache::new(cache_config),
        }
    }

    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    pub fn records(&self) -> &RecordTable {
        &self.records
    }

    pub fn cache(&self) -> &PalindromeCache {
        &self.cache
    }

    pub fn analyze(&self, text: &str) -> PalResult<RaaResult> {
        analyze(text, &self.options)
    }

    pub fn kin_info(&self, text: &str) -> PalResult<KinInfo> {
        let number = parse_natural(text, self.options.max_input_digits)?;
        Ok(KinInfo::of(&number))
    }

    pub fn classify(&self, result: &RaaResult) -> Classification {
        classify(result, &self.records)
    }

    /// Resolve `text` through the shared cache, without keeping steps.
    pub fn resolve(&self, text: &str) -> PalResult<Resolution> {
        let start = parse_natural(text, self.options.max_input_digits)?;
        Ok(self.cache.resolve(&start))
    }

    /// Full analysis of one number.
    pub fn report(&self, text: &str) -> PalResult<Report> {
        let result = self.analyze(text)?;
        let start = &result.starting_number;
        let kin = KinInfo::of(start);
        let classification = self.classify(&result);

        let first_step_canonical = (result.is_palindrome() && result.iteration_count > 1)
            .then(|| kin::lowest_kin(&start.reverse_and_add()));

        Ok(Report {
            start_is_palindrome: start.is_palindrome(),
            is_canonical: kin.canonical == *start,
            first_step_canonical,
            kin,
            classification,
            result,
        })
    }

    /// Resolve every record entry with an iteration count in `range` through
    /// the cache and compare with the table.
    pub fn verify_records(&self, range: impl RangeBounds<usize>) -> RecordVerification {
        let checks: Vec<RecordCheck> = self
            .records
            .range(range)
            .map(|entry| RecordCheck {
                iteration_count: entry.iteration_count,
                number: entry.number.clone(),
                resolution: self.cache.resolve(&entry.number),
            })
            .collect();

        let statistics = self.cache.statistics().snapshot();
        info!(
            entries = checks.len(),
            hits = statistics.hits,
            lookups = statistics.lookups(),
            "record verification finished"
        );

        RecordVerification { checks, statistics }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzeOptions::default(), CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kin::KinCount;

    #[test]
    fn test_parse_natural_rejects_zero_and_long_input() {
        let err = parse_natural("000", 250).unwrap_err();
        assert_eq!(err.invalid_reason(), Some(&InvalidReason::NotNatural));

        let err = parse_natural(&"1".repeat(251), 250).unwrap_err();
        assert_eq!(
            err.invalid_reason(),
            Some(&InvalidReason::TooLong {
                digits: 251,
                max: 250
            })
        );

        // Leading zeros do not count toward the length.
        let long = format!("000{}", "1".repeat(250));
        assert_eq!(parse_natural(&long, 250).unwrap().len(), 250);
    }

    #[test]
    fn test_analyze_uses_budget_by_length() {
        let options = AnalyzeOptions {
            step_limit_small: 10,
            step_limit_large: 20,
            small_threshold_digits: 4,
            ..AnalyzeOptions::default()
        };
        assert_eq!(analyze("196", &options).unwrap().iteration_count, 10);
        assert_eq!(analyze("1960", &options).unwrap().step_budget, 20);
    }

    #[test]
    fn test_kin_info_entry_point() {
        let info = kin_info("5,9").unwrap();
        assert_eq!(info.kin_count, KinCount::Exact(5));
        assert!(kin_info("0").is_err());
        assert!(kin_info("x").is_err());
    }

    #[test]
    fn test_kin_info_rejects_long_input() {
        let long = "1".repeat(300);
        assert!(matches!(
            kin_info(&long).unwrap_err().invalid_reason(),
            Some(InvalidReason::TooLong {
                digits: 300,
                max: DEFAULT_MAX_INPUT_DIGITS
            })
        ));
        assert!(kin_info(&"1".repeat(DEFAULT_MAX_INPUT_DIGITS)).is_ok());

        let analyzer = Analyzer::new(
            AnalyzeOptions {
                max_input_digits: 10,
                ..AnalyzeOptions::default()
            },
            CacheConfig::default(),
        );
        assert_eq!(
            analyzer.kin_info(&long).unwrap_err().invalid_reason(),
            Some(&InvalidReason::TooLong {
                digits: 300,
                max: 10
            })
        );
        assert!(analyzer.kin_info("12,345,678,901").is_err());
        assert!(analyzer.kin_info("1234567890").is_ok());
    }

    #[test]
    fn test_report_for_non_canonical_number() {
        let analyzer = Analyzer::default();
        let report = analyzer.report("98").unwrap();
        assert!(!report.is_canonical);
        assert!(!report.start_is_palindrome);
        assert_eq!(report.kin.canonical.to_string(), "89");
        assert_eq!(
            report.first_step_canonical.as_ref().map(|n| n.to_string()),
            Some("187".to_string())
        );
        assert!(matches!(report.classification, Classification::Ordinary { .. }));
    }

    #[test]
    fn test_report_for_palindromic_start() {
        let analyzer = Analyzer::default();
        let report = analyzer.report("5").unwrap();
        assert!(report.start_is_palindrome);
        assert_eq!(report.result.iteration_count, 2);
        assert_eq!(
            report.first_step_canonical.map(|n| n.to_string()),
            Some("10".to_string())
        );

        let single = analyzer.report("1").unwrap();
        assert_eq!(single.first_step_canonical, None);
    }

    #[test]
    fn test_resolve_through_cache() {
        let analyzer = Analyzer::new(
            AnalyzeOptions::default(),
            CacheConfig {
                threshold_digits: 3,
                step_ceiling: 500,
            },
        );
        let first = analyzer.resolve("89").unwrap();
        let second = analyzer.resolve("98").unwrap();
        assert_eq!(first.iteration_count, 24);
        assert!(second.from_cache);
        assert!(analyzer.resolve("abc").is_err());
    }

    #[test]
    fn test_verify_small_records() {
        let analyzer = Analyzer::default();
        let verification = analyzer.verify_records(1..=30);
        assert_eq!(verification.checks.len(), 30);
        assert!(verification.all_match());
        assert_eq!(verification.mismatches().count(), 0);
    }
}
