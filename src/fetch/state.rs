//! Attempt state definitions for the fetch retry loop
//!
//! A fetch starts in `Attempting` and ends in exactly one terminal state.

use std::fmt;

/// Represents where a fetch stands in its retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptState {
    /// Requests are still being made
    Attempting,

    /// A request returned a success status and its body was read
    Succeeded,

    /// Every allowed attempt failed
    Exhausted,

    /// A permanent client error ended the loop before the budget ran out
    Abandoned,
}

impl AttemptState {
    /// Returns true if the loop has finished
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Attempting)
    }

    /// Returns true if content was obtained
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// State after a failed attempt, given how many attempts were made
    pub fn after_failure(attempts: u32, max_attempts: u32) -> Self {
        if attempts >= max_attempts {
            Self::Exhausted
        } else {
            Self::Attempting
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attempting => "attempting",
            Self::Succeeded => "succeeded",
            Self::Exhausted => "exhausted",
            Self::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for AttemptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
