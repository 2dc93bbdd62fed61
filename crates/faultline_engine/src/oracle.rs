//! The oracle capability contract.

use faultline_core::{Config, Direction, Element, Outcome};

/// External collaborator classifying configurations.
///
/// `test` must be a pure function of the configuration's multiset of
/// elements: same input, same output. Violating purity corrupts the outcome
/// cache and is a caller error the engine does not detect.
///
/// Oracle panics are likewise the caller's responsibility: translate crashes
/// and timeouts into [`Outcome::Unresolved`] (or a decisive outcome) before
/// they reach the engine.
pub trait Oracle<E: Element> {
    /// Classify one configuration
    fn test(&mut self, config: &Config<E>) -> Outcome;

    /// Render a configuration for diagnostics
    fn display(&self, config: &Config<E>) -> String {
        format!("{:?}", config.as_slice())
    }

    /// Repair an ambiguous candidate by adding elements back (`Add`) or
    /// removing elements (`Remove`), within `context`.
    ///
    /// Returning `None` means no further repair is possible; the default
    /// leaves every ambiguity unresolved.
    fn resolve(
        &mut self,
        candidate: &Config<E>,
        context: &Config<E>,
        direction: Direction,
    ) -> Option<Config<E>> {
        let _ = (candidate, context, direction);
        None
    }
}

/// Closures are oracles with default `display` and `resolve`.
impl<E: Element, F: FnMut(&Config<E>) -> Outcome> Oracle<E> for F {
    fn test(&mut self, config: &Config<E>) -> Outcome {
        self(config)
    }
}
