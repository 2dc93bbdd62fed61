//! Relevance analysis: all relevant deltas of a failure.
//!
//! A single 1-minimal set explains one way the failure arises; when several
//! disjoint causes exist, repeated minimization over a worklist of failing
//! test sets uncovers them all. The result is a failure formula in
//! disjunctive form — one clause per 1-minimal set — plus the union of all
//! elements appearing in any clause.

use crate::error::EngineResult;
use crate::oracle::Oracle;
use crate::session::Reducer;
use faultline_core::{Config, Element, Outcome};
use serde::{Deserialize, Serialize};

/// Outcome of a relevance analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevantDeltas<E: Element> {
    /// Every element appearing in some clause, deduplicated, in ascending
    /// order
    pub atoms: Config<E>,
    /// The failure formula: each clause is a 1-minimal failing set
    pub clauses: Vec<Config<E>>,
}

/// All sets obtained by dropping one element of `minimal` from `superset`
fn non_supersets<E: Element>(superset: &Config<E>, minimal: &Config<E>) -> Vec<Config<E>> {
    minimal
        .iter()
        .map(|e| superset.minus(&Config::from(vec![e.clone()])))
        .collect()
}

impl<E: Element, O: Oracle<E>> Reducer<E, O> {
    /// Compute all relevant deltas of a failing configuration.
    ///
    /// Repeatedly minimizes a worklist of failing test sets: each found
    /// clause spawns the sets that avoid it (drop one clause element at a
    /// time), and those that still fail are minimized in turn. Worklist
    /// candidates with `UNRESOLVED` outcomes are dropped.
    ///
    /// # Errors
    ///
    /// As for [`Reducer::ddmin`], which runs once per clause.
    pub fn relevant_deltas(&mut self, failing: Config<E>) -> EngineResult<RelevantDeltas<E>> {
        let mut clauses: Vec<Config<E>> = Vec::new();
        let mut worklist = vec![failing];

        while let Some(testset) = worklist.pop() {
            let minimal = self.ddmin(testset.clone())?.delta;
            tracing::debug!(clause = minimal.len(), pending = worklist.len(), "relevance: found clause");

            // Sets already queued that contain the new clause are subsumed;
            // replace them by their clause-avoiding variants.
            let mut spawned = Vec::new();
            worklist.retain(|pending| {
                if minimal.is_subset(pending) {
                    spawned.extend(non_supersets(pending, &minimal));
                    false
                } else {
                    true
                }
            });
            spawned.extend(non_supersets(&testset, &minimal));

            for candidate in spawned {
                if self.test(&candidate) == Outcome::Fail {
                    worklist.push(candidate);
                }
            }

            clauses.push(minimal);
        }

        let mut atom_elems: Vec<E> = clauses
            .iter()
            .flat_map(|clause| clause.iter().cloned())
            .collect();
        atom_elems.sort();
        atom_elems.dedup();

        Ok(RelevantDeltas {
            atoms: Config::from(atom_elems),
            clauses,
        })
    }
}
