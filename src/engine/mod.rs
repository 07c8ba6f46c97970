// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reverse-and-add iteration engine.
//!
//! This module drives the [`RaaState`] state machine from a starting number
//! until it reaches a palindrome or exhausts its step budget.
//!
//! # Architecture
//!
//! The engine is a plain loop over `RaaState::advance`:
//! 1. Start in `Running(start, 0)`
//! 2. Apply one reverse-and-add per transition
//! 3. Stop in `Palindrome` (resolved) or `BudgetExhausted` (unresolved)
//!
//! `RaaIterator` exposes the same loop lazily, yielding each new state.
//!
//! # Known limitation
//!
//! `BudgetExhausted` is a statement about the budget, not about the number.
//! Whether any number (196 included) never reaches a palindrome is an open
//! problem; a larger budget can always turn an unresolved run into a resolved
//! one.
//!
//! # Example
//!
//! ```
//! use lychrel_check::digits::DigitSequence;
//! use lychrel_check::engine::{run, Outcome};
//!
//! let start = DigitSequence::parse("89").unwrap();
//! let result = run(&start, 350, Some(30));
//! assert_eq!(result.outcome, Outcome::Palindrome);
//! assert_eq!(result.iteration_count, 24);
//! assert_eq!(result.resultant.to_string(), "8813200023188");
//! ```

pub mod state;

pub use state::RaaState;

use crate::digits::DigitSequence;
use serde::Serialize;
use tracing::debug;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A palindrome was reached.
    Palindrome,
    /// The step budget ran out first. The number is a Lychrel candidate at
    /// this budget, nothing more.
    BudgetExhausted,
}

/// Result of one reverse-and-add run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaaResult {
    pub starting_number: DigitSequence,
    /// Number of reverse-and-add applications performed.
    pub iteration_count: usize,
    pub outcome: Outcome,
    /// The last computed state (the palindrome, if resolved).
    pub resultant: DigitSequence,
    /// The budget this run was given.
    pub step_budget: usize,
    /// `steps[k]` is the state after `k` steps; `steps[0]` is the start.
    /// Truncated when a display limit applies.
    pub steps: Vec<DigitSequence>,
    /// True if `steps` holds fewer than `iteration_count + 1` states.
    pub steps_elided: bool,
}

impl RaaResult {
    pub fn is_palindrome(&self) -> bool {
        self.outcome == Outcome::Palindrome
    }
}

/// Lazy iterator over the states of a run.
///
/// Yields the number produced by each step, ending after the terminal state.
///
/// ```
/// use lychrel_check::digits::DigitSequence;
/// use lychrel_check::engine::RaaIterator;
///
/// let states: Vec<String> = RaaIterator::new(DigitSequence::parse("59").unwrap(), 100)
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(states, ["154", "605", "1111"]);
/// ```
#[derive(Debug, Clone)]
pub struct RaaIterator {
    state: RaaState,
    max_steps: usize,
}

impl RaaIterator {
    pub fn new(start: DigitSequence, max_steps: usize) -> Self {
        Self {
            state: RaaState::initial(start, max_steps),
            max_steps,
        }
    }

    /// The current state of the run.
    pub fn state(&self) -> &RaaState {
        &self.state
    }

    /// Consume the iterator, returning the final state.
    pub fn finish(mut self) -> RaaState {
        while !self.state.is_terminal() {
            self.state = self.state.advance(self.max_steps);
        }
        self.state
    }
}

impl Iterator for RaaIterator {
    type Item = DigitSequence;

    fn next(&mut self) -> Option<DigitSequence> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = self.state.advance(self.max_steps);
        Some(self.state.current().clone())
    }
}

/// Run reverse-and-add from `start` for at most `max_steps` steps.
///
/// `display_limit` bounds how many states after the start are kept in
/// [`RaaResult::steps`]; `None` keeps all of them.
pub fn run(start: &DigitSequence, max_steps: usize, display_limit: Option<usize>) -> RaaResult {
    debug!(start = %start, max_steps, "reverse-and-add run started");

    let keep = display_limit.unwrap_or(usize::MAX);
    let mut steps = vec![start.clone()];
    let mut state = RaaState::initial(start.clone(), max_steps);

    while !state.is_terminal() {
        state = state.advance(max_steps);
        if state.iteration() <= keep {
            steps.push(state.current().clone());
        }
    }

    let iteration_count = state.iteration();
    let (outcome, resultant) = match state {
        RaaState::Palindrome { resultant, .. } => (Outcome::Palindrome, resultant),
        RaaState::BudgetExhausted { current, .. } | RaaState::Running { current, .. } => {
            (Outcome::BudgetExhausted, current)
        }
    };

    debug!(
        start = %start,
        iterations = iteration_count,
        ?outcome,
        resultant_digits = resultant.len(),
        "reverse-and-add run finished"
    );

    RaaResult {
        starting_number: start.clone(),
        iteration_count,
        outcome,
        resultant,
        step_budget: max_steps,
        steps_elided: steps.len() < iteration_count + 1,
        steps,
    }
}
