// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! States of a single reverse-and-add run.

use crate::digits::DigitSequence;

/// One state of the reverse-and-add state machine.
///
/// ```text
/// Running(s, k) --raa--> Palindrome(s', k+1)        if s' is a palindrome
///                    \-> BudgetExhausted(s', k+1)   if k+1 == max_steps
///                    \-> Running(s', k+1)           otherwise
/// ```
///
/// The palindrome test happens only after a step, so a starting number that
/// is already a palindrome still takes at least one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaaState {
    /// Still iterating; `iteration` steps applied so far.
    Running {
        current: DigitSequence,
        iteration: usize,
    },

    /// Terminal: `resultant` is a palindrome reached after `iteration` steps.
    Palindrome {
        resultant: DigitSequence,
        iteration: usize,
    },

    /// Terminal: the step budget ran out before a palindrome appeared.
    BudgetExhausted {
        current: DigitSequence,
        iteration: usize,
    },
}

impl RaaState {
    /// Initial state for `start`.
    ///
    /// With a zero budget no step can be applied, so the run is exhausted
    /// immediately.
    pub fn initial(start: DigitSequence, max_steps: usize) -> Self {
        if max_steps == 0 {
            RaaState::BudgetExhausted {
                current: start,
                iteration: 0,
            }
        } else {
            RaaState::Running {
                current: start,
                iteration: 0,
            }
        }
    }

    /// The number held by this state.
    pub fn current(&self) -> &DigitSequence {
        match self {
            RaaState::Running { current, .. } => current,
            RaaState::Palindrome { resultant, .. } => resultant,
            RaaState::BudgetExhausted { current, .. } => current,
        }
    }

    /// Steps applied to reach this state.
    pub fn iteration(&self) -> usize {
        match self {
            RaaState::Running { iteration, .. }
            | RaaState::Palindrome { iteration, .. }
            | RaaState::BudgetExhausted { iteration, .. } => *iteration,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RaaState::Running { .. })
    }

    /// Apply one transition. Terminal states are returned unchanged.
    pub fn advance(&self, max_steps: usize) -> RaaState {
        let (current, iteration) = match self {
            RaaState::Running { current, iteration } => (current, *iteration),
            terminal => return terminal.clone(),
        };

        let next = current.reverse_and_add();
        let iteration = iteration + 1;
        if next.is_palindrome() {
            RaaState::Palindrome {
                resultant: next,
                iteration,
            }
        } else if iteration >= max_steps {
            RaaState::BudgetExhausted {
                current: next,
                iteration,
            }
        } else {
            RaaState::Running {
                current: next,
                iteration,
            }
        }
    }
}
