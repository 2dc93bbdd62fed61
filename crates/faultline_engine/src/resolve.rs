//! Testing with repair: the resolution loop for ambiguous outcomes.

use crate::oracle::Oracle;
use crate::session::Reducer;
use faultline_core::{Config, Direction, Element, Outcome};

impl<E: Element, O: Oracle<E>> Reducer<E, O> {
    /// Test `candidate_subset ∪ baseline`, repairing `UNRESOLVED` outcomes.
    ///
    /// While the outcome is ambiguous, the domain `resolve` hook is asked
    /// for a revised candidate (adding elements back under `Add`, removing
    /// under `Remove`) and the revision is re-tested. Resolution stops when
    /// the oracle decides, when the hook gives up, or when the revision
    /// reaches the baseline or the upper bound `baseline ∪ full_delta` —
    /// both of those are implicitly tested already, so the ambiguity is
    /// simply propagated.
    ///
    /// Returns the decisive outcome and the accepted candidate relative to
    /// the baseline, or `UNRESOLVED` with the original subset unchanged.
    pub fn test_and_resolve(
        &mut self,
        candidate_subset: &Config<E>,
        baseline: &Config<E>,
        full_delta: &Config<E>,
        direction: Direction,
    ) -> (Outcome, Config<E>) {
        let upper = baseline.union(full_delta);
        let mut candidate = candidate_subset.union(baseline);
        let mut outcome = self.test(&candidate);

        while outcome == Outcome::Unresolved {
            let Some(repaired) = self.oracle.resolve(&candidate, full_delta, direction) else {
                return (Outcome::Unresolved, candidate_subset.clone());
            };

            if repaired.len() >= upper.len() || repaired.len() <= baseline.len() {
                // Grew to the upper bound or shrank to the baseline; both
                // already tested, so stop rather than repeat them.
                return (Outcome::Unresolved, candidate_subset.clone());
            }

            tracing::trace!(
                %direction,
                len = repaired.len(),
                "retrying repaired candidate"
            );
            candidate = repaired;
            outcome = self.test(&candidate);
        }

        (outcome, candidate.minus(baseline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Reducer;

    fn cfg(elems: &[u32]) -> Config<u32> {
        Config::from(elems.to_vec())
    }

    /// Fails on 1, but cannot decide anything containing 2 without its
    /// companion 4; `resolve` knows how to add the companion back.
    struct CompanionOracle {
        resolve_calls: u32,
    }

    impl Oracle<u32> for CompanionOracle {
        fn test(&mut self, config: &Config<u32>) -> Outcome {
            let has = |v| config.iter().any(|&e| e == v);
            if has(2) && !has(4) {
                Outcome::Unresolved
            } else if has(1) {
                Outcome::Fail
            } else {
                Outcome::Pass
            }
        }

        fn resolve(
            &mut self,
            candidate: &Config<u32>,
            _context: &Config<u32>,
            direction: Direction,
        ) -> Option<Config<u32>> {
            self.resolve_calls += 1;
            match direction {
                Direction::Add => Some(candidate.union(&cfg(&[4]))),
                Direction::Remove => {
                    let repaired = candidate.minus(&cfg(&[2]));
                    (repaired != *candidate).then_some(repaired)
                }
            }
        }
    }

    #[test]
    fn test_decisive_outcome_skips_resolution() {
        let mut session = Reducer::new(CompanionOracle { resolve_calls: 0 });
        let (outcome, kept) =
            session.test_and_resolve(&cfg(&[1]), &cfg(&[]), &cfg(&[1, 2, 3, 4]), Direction::Remove);
        assert_eq!(outcome, Outcome::Fail);
        assert_eq!(kept, cfg(&[1]));
        assert_eq!(session.oracle.resolve_calls, 0);
    }

    #[test]
    fn test_repair_by_adding_companion() {
        let mut session = Reducer::new(CompanionOracle { resolve_calls: 0 });
        let (outcome, kept) =
            session.test_and_resolve(&cfg(&[1, 2]), &cfg(&[]), &cfg(&[1, 2, 3, 4]), Direction::Add);
        assert_eq!(outcome, Outcome::Fail);
        assert_eq!(kept, cfg(&[1, 2, 4]));
        assert_eq!(session.oracle.resolve_calls, 1);
    }

    #[test]
    fn test_repair_exhausted_propagates_unresolved() {
        // Closure oracles have no resolve hook.
        let mut session = Reducer::new(|config: &Config<u32>| {
            if config.is_empty() {
                Outcome::Pass
            } else {
                Outcome::Unresolved
            }
        });
        let (outcome, kept) =
            session.test_and_resolve(&cfg(&[2]), &cfg(&[]), &cfg(&[2, 3]), Direction::Add);
        assert_eq!(outcome, Outcome::Unresolved);
        assert_eq!(kept, cfg(&[2]));
    }

    #[test]
    fn test_repair_reaching_upper_bound_stops() {
        let mut session = Reducer::new(CompanionOracle { resolve_calls: 0 });
        // Repair would grow {2} to {2, 4} = the full upper bound, which has
        // implicitly been tested; the candidate comes back unchanged.
        let (outcome, kept) =
            session.test_and_resolve(&cfg(&[2]), &cfg(&[]), &cfg(&[2, 4]), Direction::Add);
        assert_eq!(outcome, Outcome::Unresolved);
        assert_eq!(kept, cfg(&[2]));
        assert_eq!(session.oracle.resolve_calls, 1);
    }

    #[test]
    fn test_baseline_joins_candidate() {
        let mut session = Reducer::new(CompanionOracle { resolve_calls: 0 });
        // Candidate {1} over baseline {4}: the tested configuration is
        // {1, 4}, decisive FAIL; the returned subset excludes the baseline.
        let (outcome, kept) =
            session.test_and_resolve(&cfg(&[1]), &cfg(&[4]), &cfg(&[1, 2]), Direction::Remove);
        assert_eq!(outcome, Outcome::Fail);
        assert_eq!(kept, cfg(&[1]));
    }
}
