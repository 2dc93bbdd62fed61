//! Oracle outcomes and resolution directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict of an oracle on one configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The configuration behaves correctly
    Pass,
    /// The configuration reproduces the failure
    Fail,
    /// The oracle could not decide (partial input, crash, timeout)
    Unresolved,
}

impl Outcome {
    /// True if this outcome is `Pass`
    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }

    /// True if this outcome is `Fail`
    #[must_use]
    pub fn is_fail(self) -> bool {
        self == Self::Fail
    }

    /// True if this outcome is `Unresolved`
    #[must_use]
    pub fn is_unresolved(self) -> bool {
        self == Self::Unresolved
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::Unresolved => write!(f, "UNRESOLVED"),
        }
    }
}

/// Repair strategy hint passed to a domain `resolve` hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Repair an ambiguous candidate by adding elements back
    Add,
    /// Repair an ambiguous candidate by removing elements
    Remove,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "ADD"),
            Self::Remove => write!(f, "REMOVE"),
        }
    }
}
