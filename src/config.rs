// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable limits for analysis and caching.
//!
//! Both structs deserialize with `#[serde(default)]`, so a configuration file
//! only needs the fields it changes:
//!
//! ```
//! use lychrel_check::config::AnalyzeOptions;
//!
//! let options: AnalyzeOptions = serde_json::from_str(r#"{"step_limit_large": 1000}"#).unwrap();
//! assert_eq!(options.step_limit_large, 1000);
//! assert_eq!(options.step_limit_small, 350);
//! ```

use crate::errors::{PalError, PalResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Step budget for inputs shorter than `small_threshold_digits`.
pub const DEFAULT_STEP_LIMIT_SMALL: usize = 350;

/// Step budget for inputs of `small_threshold_digits` or more.
pub const DEFAULT_STEP_LIMIT_LARGE: usize = 650;

/// Digit count at which the large budget applies.
pub const DEFAULT_SMALL_THRESHOLD_DIGITS: usize = 20;

/// Longest accepted input.
pub const DEFAULT_MAX_INPUT_DIGITS: usize = 250;

/// Number of iteration states kept for display.
pub const DEFAULT_STEP_DISPLAY_LIMIT: usize = 350;

/// Length at which the cache starts looking up intermediate states.
pub const DEFAULT_CACHE_THRESHOLD_DIGITS: usize = 32;

/// Total step ceiling for cached resolution.
pub const DEFAULT_CACHE_STEP_CEILING: usize = 500;

/// Options for a single analysis.
///
/// The step budget is a confidence threshold, not a proof. No number has ever
/// been shown to never reach a palindrome, so exhausting the budget only means
/// the number behaves like a Lychrel number up to that many steps. Larger
/// inputs get a larger budget because they statistically need more steps
/// before they either resolve or can be called unresolved with confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    pub step_limit_small: usize,
    pub step_limit_large: usize,
    pub small_threshold_digits: usize,
    pub max_input_digits: usize,
    /// How many states after the start to keep in `RaaResult::steps`.
    /// `None` keeps every state.
    pub step_display_limit: Option<usize>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            step_limit_small: DEFAULT_STEP_LIMIT_SMALL,
            step_limit_large: DEFAULT_STEP_LIMIT_LARGE,
            small_threshold_digits: DEFAULT_SMALL_THRESHOLD_DIGITS,
            max_input_digits: DEFAULT_MAX_INPUT_DIGITS,
            step_display_limit: Some(DEFAULT_STEP_DISPLAY_LIMIT),
        }
    }
}

impl AnalyzeOptions {
    /// The step budget for a starting number with `digits` digits.
    pub fn step_budget(&self, digits: usize) -> usize {
        if digits < self.small_threshold_digits {
            self.step_limit_small
        } else {
            self.step_limit_large
        }
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: &Path) -> PalResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PalError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| PalError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }
}

/// Limits for [`crate::cache::PalindromeCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// States shorter than this are iterated without touching the cache.
    pub threshold_digits: usize,
    /// Total steps (from the start number) before giving up.
    pub step_ceiling: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            threshold_digits: DEFAULT_CACHE_THRESHOLD_DIGITS,
            step_ceiling: DEFAULT_CACHE_STEP_CEILING,
        }
    }
}
