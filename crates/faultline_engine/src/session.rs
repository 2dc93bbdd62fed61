//! Reduction sessions: oracle, cache, options, and statistics in one place.

use crate::cache::OutcomeCache;
use crate::oracle::Oracle;
use crate::split::{ChunkSplitter, Splitter};
use crate::stats::OracleStats;
use faultline_core::{Config, Element, Outcome};

/// Immutable session configuration, fixed at construction.
///
/// Replaces the shared mutable flags of older delta-debugging
/// implementations; two sessions never influence each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Memoize oracle outcomes in the session cache
    pub cache_outcomes: bool,
    /// Assume failure is monotone in element presence, enabling
    /// superset/subset cache short-circuiting
    pub monotonicity_assumed: bool,
    /// Skip re-verifying the passing/failing axioms at the top of every
    /// driver iteration.
    ///
    /// Opt out when the oracle may be non-deterministic; under this mode a
    /// misbehaving oracle silently corrupts results.
    pub assume_axioms_hold: bool,
    /// Let the maximizer also try prepending a chunk to the seed.
    ///
    /// Prepending shuffles element order, so this must not be combined with
    /// `monotonicity_assumed` (see [`OutcomeCache`] on canonicalization).
    pub try_prepend: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            cache_outcomes: true,
            monotonicity_assumed: false,
            assume_axioms_hold: true,
            try_prepend: false,
        }
    }
}

impl SessionOptions {
    /// Set outcome caching
    #[must_use]
    pub fn with_cache_outcomes(mut self, enabled: bool) -> Self {
        self.cache_outcomes = enabled;
        self
    }

    /// Set the monotonicity assumption
    #[must_use]
    pub fn with_monotonicity_assumed(mut self, enabled: bool) -> Self {
        self.monotonicity_assumed = enabled;
        self
    }

    /// Set axiom re-verification skipping
    #[must_use]
    pub fn with_assume_axioms_hold(mut self, enabled: bool) -> Self {
        self.assume_axioms_hold = enabled;
        self
    }

    /// Set the maximizer prepend variant
    #[must_use]
    pub fn with_try_prepend(mut self, enabled: bool) -> Self {
        self.try_prepend = enabled;
        self
    }
}

/// One delta-debugging session over a single oracle.
///
/// Owns the outcome cache for its lifetime; the cache grows monotonically
/// and is never pruned. To share a cache across sessions, extract it from
/// one session and hand it to the next with [`Reducer::with_cache`] —
/// sessions must then run strictly one after another.
pub struct Reducer<E: Element, O: Oracle<E>> {
    pub(crate) oracle: O,
    pub(crate) splitter: Box<dyn Splitter<E>>,
    pub(crate) cache: OutcomeCache<E>,
    pub(crate) options: SessionOptions,
    pub(crate) stats: OracleStats,
}

impl<E: Element, O: Oracle<E>> Reducer<E, O> {
    /// Create a session with default options and the default splitter
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            splitter: Box::new(ChunkSplitter),
            cache: OutcomeCache::new(),
            options: SessionOptions::default(),
            stats: OracleStats::default(),
        }
    }

    /// Replace the session options
    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the default splitter with a domain-aware one
    #[must_use]
    pub fn with_splitter(mut self, splitter: Box<dyn Splitter<E>>) -> Self {
        self.splitter = splitter;
        self
    }

    /// Seed the session with an existing cache
    #[must_use]
    pub fn with_cache(mut self, cache: OutcomeCache<E>) -> Self {
        self.cache = cache;
        self
    }

    /// Session options
    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Oracle invocation counts so far
    #[must_use]
    pub fn stats(&self) -> &OracleStats {
        &self.stats
    }

    /// The outcome cache accumulated so far
    #[must_use]
    pub fn cache(&self) -> &OutcomeCache<E> {
        &self.cache
    }

    /// Tear the session down, releasing the oracle and the cache
    #[must_use]
    pub fn into_parts(self) -> (O, OutcomeCache<E>, OracleStats) {
        (self.oracle, self.cache, self.stats)
    }

    /// Classify `config`, consulting the cache first.
    ///
    /// Under `monotonicity_assumed`, a cached passing superset or failing
    /// subset short-circuits the oracle call.
    pub fn test(&mut self, config: &Config<E>) -> Outcome {
        if self.options.cache_outcomes {
            if let Some(outcome) = self.cache.lookup(config) {
                return outcome;
            }
        }

        if self.options.monotonicity_assumed {
            if self.cache.lookup_superset(config) == Some(Outcome::Pass) {
                return Outcome::Pass;
            }
            if self.cache.lookup_subset(config) == Some(Outcome::Fail) {
                return Outcome::Fail;
            }
        }

        let outcome = self.oracle.test(config);
        self.stats.record(outcome);
        tracing::trace!(%outcome, len = config.len(), "oracle probe");

        if self.options.cache_outcomes {
            self.cache.add(config, outcome);
        }
        outcome
    }
}
