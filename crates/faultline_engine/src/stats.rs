//! Oracle invocation statistics.

use faultline_core::Outcome;
use serde::{Deserialize, Serialize};

/// Counts of actual oracle invocations during a session.
///
/// Cache hits and monotonicity short-circuits are not counted; only calls
/// that reached the oracle are.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleStats {
    /// Total invocations
    pub tests: u64,
    /// Invocations that returned `PASS`
    pub passes: u64,
    /// Invocations that returned `FAIL`
    pub fails: u64,
    /// Invocations that returned `UNRESOLVED`
    pub unresolved: u64,
}

impl OracleStats {
    /// Record one oracle invocation
    pub fn record(&mut self, outcome: Outcome) {
        self.tests += 1;
        match outcome {
            Outcome::Pass => self.passes += 1,
            Outcome::Fail => self.fails += 1,
            Outcome::Unresolved => self.unresolved += 1,
        }
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
