// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kin numbers: numbers that give the same result after one reverse-and-add.
//!
//! Reverse-and-add only ever sees the sum of each pair of mirrored digits
//! (first and last, second and second-to-last, ...). Any number with the same
//! length and the same pair sums therefore produces the identical first step.
//! Those numbers form a kin class.
//!
//! Within a class:
//! - the *canonical* (lowest) member pushes each pair's weight to the right,
//!   keeping the leading digit at least 1
//! - the *highest* member pushes each pair's weight to the left
//! - the class size is the product over pairs of the number of ways to split
//!   that pair's sum
//!
//! # Example
//!
//! For `59`, the pair sum is 14: `59, 68, 77, 86, 95` are kin. The canonical
//! form is `59`, the highest is `95`, and the kin count is 5.

use crate::digits::DigitSequence;
use serde::Serialize;
use std::fmt;

/// Size of a kin class.
///
/// Classes of long numbers can be far larger than any machine integer; those
/// are reported as `Overflow` rather than a wrapped or rounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KinCount {
    Exact(u64),
    Overflow,
}

impl KinCount {
    /// The exact count, if representable.
    pub fn exact(self) -> Option<u64> {
        match self {
            KinCount::Exact(count) => Some(count),
            KinCount::Overflow => None,
        }
    }

    /// True if the number has kin other than itself.
    pub fn has_other_kin(self) -> bool {
        !matches!(self, KinCount::Exact(0) | KinCount::Exact(1))
    }
}

impl fmt::Display for KinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinCount::Exact(count) => {
                write!(f, "{}", DigitSequence::from_u64(*count).grouped())
            }
            KinCount::Overflow => write!(f, "more than {}", u64::MAX),
        }
    }
}

/// Kin class summary for one number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KinInfo {
    /// Lowest member of the class.
    pub canonical: DigitSequence,
    /// Highest member of the class.
    pub highest: DigitSequence,
    /// Number of members, the number itself included.
    pub kin_count: KinCount,
}

impl KinInfo {
    /// Compute the kin class summary of `n`.
    pub fn of(n: &DigitSequence) -> Self {
        Self {
            canonical: lowest_kin(n),
            highest: highest_kin(n),
            kin_count: kin_count(n),
        }
    }
}

/// How far the pair `(a, b)` can shift weight right (`down`) and left (`up`)
/// while keeping its sum and leaving every digit in 0..=9.
///
/// The leading digit may not drop to zero.
fn pair_slack(is_first: bool, a: u8, b: u8) -> (u8, u8) {
    let floor = u8::from(is_first);
    let down = a.saturating_sub(floor).min(9 - b);
    let up = (9 - a).min(b);
    (down, up)
}

/// Apply `shift` to every mirrored pair of `n`, walking inward from both ends.
fn transform_pairs(n: &DigitSequence, shift: impl Fn(bool, u8, u8) -> (u8, u8)) -> DigitSequence {
    let mut digits = n.digits().to_vec();
    if digits.len() < 2 {
        return n.clone();
    }
    let (mut i, mut j) = (0, digits.len() - 1);
    while i < j {
        let (a, b) = shift(i == 0, digits[i], digits[j]);
        digits[i] = a;
        digits[j] = b;
        i += 1;
        j -= 1;
    }
    DigitSequence::normalized(digits)
}

/// The lowest kin of `n`, its canonical form.
pub fn lowest_kin(n: &DigitSequence) -> DigitSequence {
    transform_pairs(n, |is_first, a, b| {
        let (down, _) = pair_slack(is_first, a, b);
        (a - down, b + down)
    })
}

/// The highest kin of `n`.
pub fn highest_kin(n: &DigitSequence) -> DigitSequence {
    transform_pairs(n, |is_first, a, b| {
        let (_, up) = pair_slack(is_first, a, b);
        (a + up, b - up)
    })
}

/// True if `n` is already the lowest member of its kin class.
pub fn is_canonical(n: &DigitSequence) -> bool {
    lowest_kin(n) == *n
}

/// Number of kin of `n`, including `n` itself.
pub fn kin_count(n: &DigitSequence) -> KinCount {
    let digits = n.digits();
    let mut count: u64 = 1;
    if digits.len() < 2 {
        return KinCount::Exact(count);
    }

    let (mut i, mut j) = (0, digits.len() - 1);
    while i < j {
        let (down, up) = pair_slack(i == 0, digits[i], digits[j]);
        let ways = 1 + u64::from(down) + u64::from(up);
        count = match count.checked_mul(ways) {
            Some(product) => product,
            None => return KinCount::Overflow,
        };
        i += 1;
        j -= 1;
    }
    KinCount::Exact(count)
}
