// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lychrel_check::{CacheConfig, DigitSequence, PalindromeCache};

/// Parse a literal known to be valid.
pub fn seq(text: &str) -> DigitSequence {
    DigitSequence::parse(text).unwrap()
}

/// A cache that starts looking up states at `threshold_digits`, with the
/// default step ceiling.
pub fn cache_with_threshold(threshold_digits: usize) -> PalindromeCache {
    PalindromeCache::new(CacheConfig {
        threshold_digits,
        ..CacheConfig::default()
    })
}

/// The mirrored pair sums (and middle digit) that determine the first
/// reverse-and-add step of `n`.
pub fn pair_signature(n: &DigitSequence) -> Vec<u8> {
    let digits = n.digits();
    let mut signature = vec![digits.len() as u8];
    let (mut i, mut j) = (0usize, digits.len() - 1);
    while i < j {
        signature.push(digits[i] + digits[j]);
        i += 1;
        j -= 1;
    }
    if i == j {
        signature.push(100 + digits[i]);
    }
    signature
}
