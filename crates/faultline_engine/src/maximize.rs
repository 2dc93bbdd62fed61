//! Maximization: growing a failing configuration toward a passing bound.

use crate::align::align;
use crate::error::{EngineError, EngineResult};
use crate::oracle::Oracle;
use crate::session::Reducer;
use faultline_core::{Config, Element, Outcome, Valued};
use serde::{Deserialize, Serialize};

/// Result of a maximization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maximized<E: Element> {
    /// The part of the bound the failing configuration could not absorb
    pub remaining: Config<E>,
    /// The maximal failing configuration
    pub maximal_failing: Config<E>,
    /// The passing bound, unchanged
    pub passing_bound: Config<E>,
}

impl<E: Element, O: Oracle<E>> Reducer<E, O> {
    /// Grow a failing seed toward a passing bound until no single chunk of
    /// the remaining difference can be absorbed while still failing.
    ///
    /// The seed must already be a sub-multiset of the bound; use
    /// [`Reducer::maximize_aligned`] when it is drawn from a different
    /// underlying sequence. With the `try_prepend` option, a chunk that
    /// cannot be appended is also tried in front of the seed before the
    /// chunk is given up on.
    ///
    /// # Errors
    ///
    /// Returns an error if `granularity < 2`, if the seed is not contained
    /// in the bound, or (unless `assume_axioms_hold` is set) if the oracle
    /// contradicts the FAIL/PASS axioms on seed and bound.
    pub fn maximize(
        &mut self,
        seed: Config<E>,
        bound: Config<E>,
        granularity: usize,
    ) -> EngineResult<Maximized<E>> {
        if granularity < 2 {
            return Err(EngineError::InvalidGranularity { granularity });
        }

        let mut failing = seed;
        let mut n = granularity;
        let mut offset = 0usize;
        let mut run = 1u64;

        loop {
            if !self.options.assume_axioms_hold {
                let t_fail = self.test(&failing);
                if t_fail != Outcome::Fail {
                    return Err(EngineError::FailingDoesNotFail { outcome: t_fail });
                }
                let t_pass = self.test(&bound);
                if t_pass != Outcome::Pass {
                    return Err(EngineError::PassingDoesNotPass { outcome: t_pass });
                }
            }
            if !failing.is_subset(&bound) {
                return Err(EngineError::SubsetInvariantViolated);
            }

            let delta = bound.minus(&failing);
            if n > delta.len() {
                tracing::debug!(run, absorbed = failing.len(), "maximize: done");
                return Ok(Maximized {
                    remaining: delta,
                    maximal_failing: failing,
                    passing_bound: bound,
                });
            }

            let chunks = self.splitter.split(&delta, n);
            tracing::debug!(run, n, deltas = delta.len(), "maximize: splitting difference");

            let mut progress = false;
            for j in 0..n {
                let i = (j + offset) % n;

                let appended = failing.union(&chunks[i]);
                if self.test(&appended) == Outcome::Fail {
                    tracing::debug!(deltas = appended.len(), "maximize: absorbed chunk");
                    failing = appended;
                    n = (n - 1).max(2);
                    offset = i;
                    progress = true;
                    break;
                }

                if self.options.try_prepend {
                    let prepended = chunks[i].concat(&failing);
                    if self.test(&prepended) == Outcome::Fail {
                        tracing::debug!(
                            deltas = prepended.len(),
                            "maximize: absorbed chunk at front"
                        );
                        failing = prepended;
                        n = (n - 1).max(2);
                        offset = i;
                        progress = true;
                        break;
                    }
                }
            }

            if !progress {
                if n >= delta.len() {
                    tracing::debug!(run, absorbed = failing.len(), "maximize: done");
                    return Ok(Maximized {
                        remaining: delta,
                        maximal_failing: failing,
                        passing_bound: bound,
                    });
                }
                let next_n = (n * 2).min(delta.len());
                tracing::debug!(run, next_n, "maximize: increasing granularity");
                offset = offset * next_n / n;
                n = next_n;
            }

            run += 1;
        }
    }

    /// Align the seed onto the bound's element stream, then maximize.
    ///
    /// For seeds built from a different literal sequence than the bound
    /// (e.g. the minimal fragment of one string grown toward another
    /// string).
    ///
    /// # Errors
    ///
    /// As for [`Reducer::maximize`], plus
    /// [`EngineError::AlignmentFailed`] when some seed element has no value
    /// match in the bound.
    pub fn maximize_aligned(
        &mut self,
        seed: &Config<E>,
        bound: Config<E>,
        granularity: usize,
    ) -> EngineResult<Maximized<E>>
    where
        E: Valued,
    {
        let aligned = align(seed, &bound)?;
        self.maximize(aligned, bound, granularity)
    }
}
