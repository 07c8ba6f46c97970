// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DigitSequence type for non-negative integers of arbitrary length.
//!
//! A DigitSequence stores one decimal digit per byte, most significant digit
//! first, with no leading zeros except for the number zero itself (`[0]`).
//!
//! # Examples
//!
//! ```
//! use lychrel_check::digits::DigitSequence;
//!
//! let n = DigitSequence::parse("1,234'567").unwrap();
//! assert_eq!(n.to_string(), "1234567");
//! assert_eq!(n.len(), 7);
//! assert_eq!(n.format_grouped(3, ","), "1,234,567");
//! ```

use crate::errors::{InvalidReason, PalError, PalResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Characters accepted between digits and ignored by [`DigitSequence::parse`].
pub const SEPARATORS: &[char] = &[',', '\''];

/// An immutable non-negative integer as decimal digits, most significant first.
///
/// There is no way to mutate a sequence once built: every arithmetic
/// operation returns a fresh value. Equality and hashing are by digits, which
/// for canonical sequences is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

#[allow(clippy::len_without_is_empty)]
impl DigitSequence {
    /// The number zero.
    pub fn zero() -> Self {
        Self(vec![0])
    }

    /// Parse a number from text.
    ///
    /// Commas, apostrophes and whitespace are separators and are dropped
    /// wherever they appear. Leading zeros are stripped. Fails with
    /// [`PalError::InvalidNumber`] when any other character is present or no
    /// digit remains. Zero itself parses successfully.
    pub fn parse(input: &str) -> PalResult<Self> {
        let mut digits = Vec::with_capacity(input.len());
        let mut saw_digit = false;

        for (position, character) in input.chars().enumerate() {
            if let Some(value) = character.to_digit(10) {
                saw_digit = true;
                // Skip leading zeros
                if value != 0 || !digits.is_empty() {
                    digits.push(value as u8);
                }
            } else if !(character.is_whitespace() || SEPARATORS.contains(&character)) {
                return Err(PalError::invalid(
                    input,
                    InvalidReason::UnexpectedCharacter {
                        character,
                        position,
                    },
                ));
            }
        }

        if !saw_digit {
            return Err(PalError::invalid(input, InvalidReason::NoDigits));
        }
        if digits.is_empty() {
            return Ok(Self::zero());
        }
        Ok(Self(digits))
    }

    /// Build a sequence from digit values (most significant first).
    ///
    /// Leading zeros are stripped. Returns `None` for an empty slice or any
    /// value above 9.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.is_empty() || digits.iter().any(|&d| d > 9) {
            return None;
        }
        Some(Self::normalized(digits.to_vec()))
    }

    /// Build a sequence from a machine integer.
    pub fn from_u64(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        digits.reverse();
        Self(digits)
    }

    /// Strip leading zeros from raw digits, keeping a lone zero.
    pub(crate) fn normalized(mut digits: Vec<u8>) -> Self {
        let first_nonzero = digits.iter().position(|&d| d != 0);
        match first_nonzero {
            Some(0) => Self(digits),
            Some(start) => {
                digits.drain(..start);
                Self(digits)
            }
            None => Self::zero(),
        }
    }

    /// Wrap digits already known to be canonical.
    pub(crate) fn from_canonical(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.len() == 1 || digits[0] != 0);
        Self(digits)
    }

    /// The digits, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// Number of decimal digits (at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the number zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    /// Format with a separator between groups of `group_size` digits,
    /// counted from the least significant end.
    ///
    /// A `group_size` of zero disables grouping.
    pub fn format_grouped(&self, group_size: usize, separator: &str) -> String {
        let size = self.0.len();
        let mut out = String::with_capacity(size + size / group_size.max(1) * separator.len());
        for (i, &digit) in self.0.iter().enumerate() {
            if i > 0 && group_size > 0 && (size - i) % group_size == 0 {
                out.push_str(separator);
            }
            out.push(char::from(b'0' + digit));
        }
        out
    }

    /// Format with commas every three digits.
    pub fn grouped(&self) -> String {
        self.format_grouped(3, ",")
    }
}

impl Ord for DigitSequence {
    /// Numeric order: shorter is smaller, equal lengths compare digit by digit.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DigitSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|&d| char::from(b'0' + d)).collect();
        f.write_str(&text)
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSequence({})", self)
    }
}

impl FromStr for DigitSequence {
    type Err = PalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for DigitSequence {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Serialize for DigitSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DigitSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
