//! Difference minimization: the general delta-debugging driver.

use crate::error::{EngineError, EngineResult};
use crate::oracle::Oracle;
use crate::session::Reducer;
use faultline_core::{Config, Direction, Element, Outcome};
use serde::{Deserialize, Serialize};

/// Result of a minimization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minimized<E: Element> {
    /// The 1-minimal failure-inducing difference (`failing_base` minus
    /// `passing_base`)
    pub delta: Config<E>,
    /// The enlarged passing configuration
    pub passing_base: Config<E>,
    /// The shrunken failing configuration
    pub failing_base: Config<E>,
}

impl<E: Element, O: Oracle<E>> Reducer<E, O> {
    /// Minimize the difference between a passing and a failing
    /// configuration.
    ///
    /// Narrows the pair from both sides — shrinking `failing` toward
    /// `passing` and growing `passing` toward `failing` — until no single
    /// chunk of the remaining difference can cross over without flipping
    /// its outcome. For total oracles this isolates a single
    /// failure-inducing element.
    ///
    /// # Errors
    ///
    /// Returns an error if `passing` is not a sub-multiset of `failing`,
    /// or (unless `assume_axioms_hold` is set) if the oracle contradicts
    /// the PASS/FAIL axioms on the pair.
    pub fn minimize(
        &mut self,
        passing: Config<E>,
        failing: Config<E>,
    ) -> EngineResult<Minimized<E>> {
        self.drive_minimize(passing, failing, true)
    }

    /// Minimize a failing configuration against an empty passing base.
    ///
    /// The classic `ddmin`: only the failing side shrinks, so the result's
    /// `delta` is itself a 1-minimal failing configuration — no single
    /// element can be removed without losing the failure.
    ///
    /// # Errors
    ///
    /// As for [`Reducer::minimize`].
    pub fn ddmin(&mut self, failing: Config<E>) -> EngineResult<Minimized<E>> {
        self.drive_minimize(Config::new(), failing, false)
    }

    fn drive_minimize(
        &mut self,
        mut passing: Config<E>,
        mut failing: Config<E>,
        grow_passing: bool,
    ) -> EngineResult<Minimized<E>> {
        let mut n = 2usize;
        let mut offset = 0usize;
        let mut run = 1u64;

        loop {
            if !self.options.assume_axioms_hold {
                let t_pass = self.test(&passing);
                if t_pass != Outcome::Pass {
                    return Err(EngineError::PassingDoesNotPass { outcome: t_pass });
                }
                let t_fail = self.test(&failing);
                if t_fail != Outcome::Fail {
                    return Err(EngineError::FailingDoesNotFail { outcome: t_fail });
                }
            }
            if !passing.is_subset(&failing) {
                return Err(EngineError::SubsetInvariantViolated);
            }

            let delta = failing.minus(&passing);
            if n > delta.len() {
                tracing::debug!(run, deltas = delta.len(), "minimize: done");
                return Ok(Minimized {
                    delta,
                    passing_base: passing,
                    failing_base: failing,
                });
            }

            let chunks = self.splitter.split(&delta, n);
            tracing::debug!(run, n, deltas = delta.len(), "minimize: splitting difference");

            let mut progress = false;
            for j in 0..n {
                let i = (j + offset) % n;

                // Does the chunk alone, over the passing base, already fail?
                let (outcome, subset) =
                    self.test_and_resolve(&chunks[i], &passing, &delta, Direction::Remove);
                let candidate = passing.union(&subset);
                if outcome == Outcome::Fail {
                    tracing::debug!(deltas = candidate.len(), "minimize: reduced failing to chunk");
                    failing = candidate;
                    n = 2;
                    offset = 0;
                    progress = true;
                    break;
                }
                if grow_passing && outcome == Outcome::Pass {
                    tracing::debug!(deltas = candidate.len(), "minimize: grew passing by chunk");
                    passing = candidate;
                    n = (n - 1).max(2);
                    offset = i;
                    progress = true;
                    break;
                }

                // Otherwise, does the complement decide?
                let complement = delta.minus(&chunks[i]);
                let (outcome, subset) =
                    self.test_and_resolve(&complement, &passing, &delta, Direction::Add);
                let candidate = passing.union(&subset);
                if grow_passing && outcome == Outcome::Pass {
                    tracing::debug!(deltas = candidate.len(), "minimize: grew passing to complement");
                    passing = candidate;
                    n = 2;
                    offset = 0;
                    progress = true;
                    break;
                }
                if outcome == Outcome::Fail {
                    tracing::debug!(deltas = candidate.len(), "minimize: reduced failing to complement");
                    failing = candidate;
                    n = (n - 1).max(2);
                    offset = i;
                    progress = true;
                    break;
                }
            }

            if !progress {
                if n >= delta.len() {
                    tracing::debug!(run, deltas = delta.len(), "minimize: done");
                    return Ok(Minimized {
                        delta,
                        passing_base: passing,
                        failing_base: failing,
                    });
                }
                let next_n = (n * 2).min(delta.len());
                tracing::debug!(run, next_n, "minimize: increasing granularity");
                offset = offset * next_n / n;
                n = next_n;
            }

            run += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionOptions;
    use faultline_core::Symbol;

    /// FAIL iff the reassembled text contains the substring `test`.
    fn substring_oracle(config: &Config<Symbol>) -> Outcome {
        if config.to_text().contains("test") {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    }

    #[test]
    fn test_ddmin_isolates_substring() {
        let failing = Config::from_text("thisistestinputerrorthatshouldfail");
        let mut session = Reducer::new(substring_oracle);

        let result = session.ddmin(failing).unwrap();
        assert_eq!(result.delta.to_text(), "test");
        assert!(result.passing_base.is_empty());
        assert_eq!(result.failing_base, result.delta);
    }

    #[test]
    fn test_ddmin_result_is_one_minimal() {
        let failing = Config::from_text("xxtestxx");
        let mut session = Reducer::new(substring_oracle);
        let minimal = session.ddmin(failing).unwrap().delta;

        assert_eq!(substring_oracle(&minimal), Outcome::Fail);
        for dropped in minimal.iter() {
            let smaller = minimal.minus(&Config::from(vec![*dropped]));
            assert_ne!(substring_oracle(&smaller), Outcome::Fail);
        }
    }

    #[test]
    fn test_minimize_isolates_single_difference() {
        let failing = Config::from_text("thisistestinputerrorthatshouldfail");
        let mut session = Reducer::new(substring_oracle);

        let result = session.minimize(Config::new(), failing.clone()).unwrap();

        // The two-sided driver narrows the gap to one element.
        assert_eq!(result.delta.len(), 1);
        assert_eq!(result.delta, result.failing_base.minus(&result.passing_base));
        assert!(result.passing_base.is_subset(&result.failing_base));
        assert!(result.failing_base.is_subset(&failing));
        assert_eq!(substring_oracle(&result.passing_base), Outcome::Pass);
        assert_eq!(substring_oracle(&result.failing_base), Outcome::Fail);
    }

    #[test]
    fn test_minimize_with_axiom_verification() {
        let failing = Config::from_text("xxtestxx");
        let options = SessionOptions::default().with_assume_axioms_hold(false);
        let mut session = Reducer::new(substring_oracle).with_options(options);

        // Verification runs at the top of every iteration; a run that
        // completes has held the invariants throughout.
        let result = session.minimize(Config::new(), failing).unwrap();
        assert_eq!(result.delta.len(), 1);
    }

    #[test]
    fn test_minimize_shrinks() {
        let failing = Config::from_text("aaatestbbb");
        let mut session = Reducer::new(substring_oracle);
        let result = session.ddmin(failing.clone()).unwrap();
        assert!(result.delta.len() <= failing.len());
        assert_eq!(result.delta.len(), 4);
    }

    #[test]
    fn test_idempotence() {
        let failing = Config::from_text("thisistestinputerrorthatshouldfail");
        let mut session = Reducer::new(substring_oracle);
        let first = session.minimize(Config::new(), failing).unwrap();

        let second = session
            .minimize(first.passing_base.clone(), first.failing_base.clone())
            .unwrap();
        assert_eq!(second.delta, first.delta);
        assert_eq!(second.passing_base, first.passing_base);
        assert_eq!(second.failing_base, first.failing_base);
    }

    #[test]
    fn test_failing_that_passes_is_rejected() {
        let options = SessionOptions::default().with_assume_axioms_hold(false);
        let mut session =
            Reducer::new(|_: &Config<Symbol>| Outcome::Pass).with_options(options);

        let err = session.ddmin(Config::from_text("fine")).unwrap_err();
        assert_eq!(
            err,
            EngineError::FailingDoesNotFail {
                outcome: Outcome::Pass
            }
        );
    }

    #[test]
    fn test_passing_that_fails_is_rejected() {
        let options = SessionOptions::default().with_assume_axioms_hold(false);
        let mut session =
            Reducer::new(|_: &Config<Symbol>| Outcome::Fail).with_options(options);

        let err = session
            .minimize(Config::from_text("a"), Config::from_text("ab"))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::PassingDoesNotPass {
                outcome: Outcome::Fail
            }
        );
    }

    #[test]
    fn test_subset_violation_is_rejected() {
        let mut session = Reducer::new(substring_oracle);
        let passing = Config::from_text("zz");
        let failing = Config::from_text("test");
        let err = session.minimize(passing, failing).unwrap_err();
        assert_eq!(err, EngineError::SubsetInvariantViolated);
    }

    /// Scenario: a JSON oracle with a genuine UNRESOLVED channel.
    ///
    /// PASS if the text parses (or is blank), FAIL on a parse error when the
    /// last character is not `}`, UNRESOLVED otherwise.
    fn json_oracle(config: &Config<Symbol>) -> Outcome {
        let text = config.to_text();
        if text.trim().is_empty() {
            return Outcome::Pass;
        }
        if serde_json::from_str::<serde_json::Value>(&text).is_ok() {
            return Outcome::Pass;
        }
        if text.ends_with('}') {
            Outcome::Unresolved
        } else {
            Outcome::Fail
        }
    }

    #[test]
    fn test_json_fragment_minimization() {
        let failing = Config::from_text(r#"{"baz": 7, "zip": 1.0, "zop": [1, 2]"#);
        assert_eq!(json_oracle(&failing), Outcome::Fail);

        let mut session = Reducer::new(json_oracle);
        let minimal = session.ddmin(failing).unwrap().delta;
        let text = minimal.to_text();

        // A short unterminated remnant whose trailing character is not `}`.
        assert_eq!(json_oracle(&minimal), Outcome::Fail);
        assert!(!text.ends_with('}'));
        assert!(minimal.len() <= 2, "expected a near-singleton fragment, got {text:?}");

        // 1-minimal: dropping any single symbol loses the decisive failure.
        for dropped in minimal.iter() {
            let smaller = minimal.minus(&Config::from(vec![*dropped]));
            assert_ne!(json_oracle(&smaller), Outcome::Fail);
        }
    }

    #[test]
    fn test_stats_are_recorded() {
        let failing = Config::from_text("xxtestxx");
        let mut session = Reducer::new(substring_oracle);
        session.ddmin(failing).unwrap();

        let stats = session.stats();
        assert!(stats.tests > 0);
        assert_eq!(stats.tests, stats.passes + stats.fails + stats.unresolved);
        assert!(stats.fails > 0);
    }
}
