// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arbitrary-precision decimal numbers.
//!
//! This module contains the value type every other module works on:
//! - DigitSequence: canonical, immutable digits of a non-negative integer
//! - reverse_and_add / is_palindrome: the two operations the iteration needs

pub mod ops;
pub mod sequence;

pub use ops::{is_palindrome, reverse_and_add};
pub use sequence::DigitSequence;
