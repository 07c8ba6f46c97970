// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for number parsing and analysis.
//!
//! Only invalid input is an error. A run that never reaches a palindrome is a
//! normal [`crate::engine::Outcome::BudgetExhausted`] result, and a kin count
//! too large to represent is [`crate::kin::KinCount::Overflow`].

use thiserror::Error;

/// Result type for analysis operations.
pub type PalResult<T> = Result<T, PalError>;

/// Why a piece of text was rejected as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Nothing but separators (or nothing at all).
    #[error("no decimal digits")]
    NoDigits,

    /// A character that is neither a decimal digit nor a separator.
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// The number is zero, which is not a natural number.
    #[error("not a natural number (must be at least 1)")]
    NotNatural,

    /// More significant digits than the analysis accepts.
    #[error("{digits} digits exceeds the maximum of {max}")]
    TooLong { digits: usize, max: usize },
}

/// Errors surfaced to callers of the analysis entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PalError {
    #[error("invalid number {input:?}: {reason}")]
    InvalidNumber { input: String, reason: InvalidReason },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("output error: {0}")]
    Output(String),
}

impl PalError {
    pub(crate) fn invalid(input: &str, reason: InvalidReason) -> Self {
        PalError::InvalidNumber {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejection reason, if this is an invalid-number error.
    pub fn invalid_reason(&self) -> Option<&InvalidReason> {
        match self {
            PalError::InvalidNumber { reason, .. } => Some(reason),
            PalError::Config(_) | PalError::Output(_) => None,
        }
    }
}
