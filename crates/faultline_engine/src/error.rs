//! Engine error types.
//!
//! Contract violations are fatal: a reduction over a passing configuration
//! that does not pass, or a failing one that does not fail, can only produce
//! a meaningless result, so the engine returns an error instead of
//! attempting recovery. `UNRESOLVED` oracle outcomes are not errors; they
//! flow through the resolver.

use faultline_core::Outcome;

/// Engine result type
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal precondition failures of a reduction session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The supposedly passing configuration did not pass
    #[error("passing configuration does not pass: oracle returned {outcome}")]
    PassingDoesNotPass {
        /// What the oracle actually returned
        outcome: Outcome,
    },

    /// The supposedly failing configuration did not fail
    #[error("failing configuration does not fail: oracle returned {outcome}")]
    FailingDoesNotFail {
        /// What the oracle actually returned
        outcome: Outcome,
    },

    /// The smaller configuration is not a sub-multiset of the larger one
    #[error("subset invariant violated: the smaller configuration is not contained in the larger")]
    SubsetInvariantViolated,

    /// Alignment could not map a seed element onto the bound
    #[error("alignment failed: seed element at index {index} has no remaining match in the bound")]
    AlignmentFailed {
        /// Index of the unmatched seed element
        index: usize,
    },

    /// Granularity below the minimum of 2
    #[error("granularity must be at least 2, got {granularity}")]
    InvalidGranularity {
        /// The rejected value
        granularity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::PassingDoesNotPass {
            outcome: Outcome::Fail,
        };
        assert_eq!(
            format!("{err}"),
            "passing configuration does not pass: oracle returned FAIL"
        );

        let err = EngineError::AlignmentFailed { index: 4 };
        assert!(format!("{err}").contains("index 4"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EngineError::SubsetInvariantViolated,
            EngineError::SubsetInvariantViolated
        );
        assert_ne!(
            EngineError::InvalidGranularity { granularity: 0 },
            EngineError::InvalidGranularity { granularity: 1 }
        );
    }
}
