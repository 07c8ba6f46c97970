// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command implementations for `palcheck`.
//!
//! Each command writes its output to the given writer so the text rendering
//! can be tested without a process.

use super::args::Command;
use crate::config::{AnalyzeOptions, CacheConfig};
use crate::context::{kin_info, Analyzer, Report};
use crate::engine::Outcome;
use crate::errors::{PalError, PalResult};
use crate::kin::KinInfo;
use crate::memo::Classification;
use serde::Serialize;
use std::io::Write;

/// Dispatch a parsed command.
pub fn execute<W: Write>(command: Command, out: &mut W) -> PalResult<()> {
    match command {
        Command::Check {
            number,
            json,
            config,
            small_limit,
            large_limit,
            show_steps,
        } => {
            let mut options = match config {
                Some(path) => AnalyzeOptions::from_json_file(&path)?,
                None => AnalyzeOptions::default(),
            };
            if let Some(limit) = small_limit {
                options.step_limit_small = limit;
            }
            if let Some(limit) = large_limit {
                options.step_limit_large = limit;
            }
            if !json {
                // Text mode lists every step of a resolved run; `show_steps`
                // bounds the listing only for unresolved ones.
                options.step_display_limit = None;
            }

            let analyzer = Analyzer::new(options, CacheConfig::default());
            let report = analyzer.report(&number)?;
            if json {
                write_json(out, &report)
            } else {
                write_report(
                    out,
                    &report,
                    analyzer.records().highest_iteration_count(),
                    show_steps,
                )
            }
        }
        Command::Kin { number, json } => {
            let info = kin_info(&number)?;
            if json {
                write_json(out, &info)
            } else {
                write_kin(out, &info)
            }
        }
        Command::Records {
            from,
            to,
            threshold,
        } => {
            let mut cache_config = CacheConfig::default();
            if let Some(threshold) = threshold {
                cache_config.threshold_digits = threshold;
            }
            let analyzer = Analyzer::new(AnalyzeOptions::default(), cache_config);
            let to = to
                .or_else(|| analyzer.records().highest_iteration_count())
                .unwrap_or(from);
            let verification = analyzer.verify_records(from..=to);

            for check in verification.mismatches() {
                line(
                    out,
                    format!(
                        "MISMATCH {}: {} resolved in {} (palindrome: {})",
                        check.iteration_count,
                        check.number.grouped(),
                        check.resolution.iteration_count,
                        check.resolution.is_palindrome
                    ),
                )?;
            }
            let stats = verification.statistics;
            line(
                out,
                format!(
                    "Checked {} entries, {} mismatches. Cache hits: {}/{}",
                    verification.checks.len(),
                    verification.mismatches().count(),
                    stats.hits,
                    stats.lookups()
                ),
            )
        }
    }
}

fn io_error(e: std::io::Error) -> PalError {
    PalError::Output(e.to_string())
}

fn line<W: Write>(out: &mut W, text: impl AsRef<str>) -> PalResult<()> {
    writeln!(out, "{}", text.as_ref()).map_err(io_error)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> PalResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PalError::Output(e.to_string()))?;
    line(out, text)
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Render a report as plain text.
///
/// A resolved run lists every retained step; an unresolved one lists at most
/// `unresolved_steps_shown`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    highest_known: Option<usize>,
    unresolved_steps_shown: usize,
) -> PalResult<()> {
    let result = &report.result;
    let start = &result.starting_number;
    let k = result.iteration_count;

    line(out, format!("Tested number: {}", start.grouped()))?;

    match &report.classification {
        Classification::WorldRecord { previous_record } => line(
            out,
            format!(
                "New world record: the most delayed known palindrome needs {} iterations, this one needs {}.",
                previous_record.unwrap_or(0),
                k
            ),
        )?,
        Classification::NewSmallest { previous } => line(
            out,
            match previous {
                Some(previous) => format!(
                    "Smaller than the smallest known number solving in {} iterations ({}).",
                    k,
                    previous.grouped()
                ),
                None => format!("First known number solving in {} iterations.", k),
            },
        )?,
        _ => {}
    }

    match result.outcome {
        Outcome::Palindrome => {
            let rank = match &report.classification {
                Classification::MatchesSmallest { proven: true, .. } => "the reliably smallest",
                Classification::MatchesSmallest { proven: false, .. } => "the smallest known",
                _ => "a",
            };
            line(
                out,
                format!(
                    "The {}-digit number is {} delayed palindrome solving in {} reverse-and-add operation{}.",
                    start.len(),
                    rank,
                    k,
                    plural(k)
                ),
            )?;
            if let Classification::MatchesSmallest {
                is_current_record: true,
                ..
            } = report.classification
            {
                line(out, "It is the current world record.")?;
            }
            line(
                out,
                format!(
                    "Resultant palindrome ({} digit{}): {}",
                    result.resultant.len(),
                    plural(result.resultant.len()),
                    result.resultant
                ),
            )?;
        }
        Outcome::BudgetExhausted => {
            line(
                out,
                format!(
                    "The {}-digit number is a Lychrel candidate: {} reverse-and-add operations reached {} digits without a palindrome.",
                    start.len(),
                    k,
                    result.resultant.len()
                ),
            )?;
            line(
                out,
                "This is a bounded search; no number has been proven never to reach a palindrome.",
            )?;
        }
    }

    if report.start_is_palindrome {
        line(out, "The number is itself a palindrome.")?;
    }

    if report.is_canonical {
        line(out, "The number is canonical.")?;
    } else {
        line(
            out,
            format!("Canonical form: {}", report.kin.canonical.grouped()),
        )?;
    }
    write_kin_count(out, &report.kin)?;

    if let Classification::Ordinary { smallest_known } = &report.classification {
        line(
            out,
            format!(
                "Not the smallest known number solving in {} iterations; that is {}.",
                k,
                smallest_known.grouped()
            ),
        )?;
    }
    if let Some(first) = &report.first_step_canonical {
        line(
            out,
            format!("Result of 1 iteration (canonical form): {}", first.grouped()),
        )?;
    }
    if let Some(highest) = highest_known {
        line(out, format!("Highest known iteration count: {}", highest))?;
    }

    let retained = result.steps.len().saturating_sub(1);
    let shown = match result.outcome {
        Outcome::Palindrome => retained,
        Outcome::BudgetExhausted => retained.min(unresolved_steps_shown),
    };

    line(out, "")?;
    for (i, pair) in result.steps.windows(2).take(shown).enumerate() {
        line(out, format!("#{:<4} {}", i + 1, pair[0]))?;
        let reversed: String = pair[0].to_string().chars().rev().collect();
        line(out, format!("    + {}", reversed))?;
    }
    if let Some(last) = result.steps.get(shown) {
        line(out, format!("      {}", last))?;
    }
    if shown < k {
        line(out, format!("({} of {} iterations shown)", shown, k))?;
    }
    Ok(())
}

fn write_kin_count<W: Write>(out: &mut W, info: &KinInfo) -> PalResult<()> {
    if info.kin_count.has_other_kin() {
        line(
            out,
            format!(
                "There are {} kin numbers giving the same result after one reverse-and-add.",
                info.kin_count
            ),
        )?;
        line(out, format!("Greatest kin number: {}", info.highest.grouped()))
    } else {
        line(out, "There are no other kin numbers for this number.")
    }
}

fn write_kin<W: Write>(out: &mut W, info: &KinInfo) -> PalResult<()> {
    line(out, format!("Canonical form: {}", info.canonical.grouped()))?;
    write_kin_count(out, info)
}
