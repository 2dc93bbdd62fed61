//! Outcome cache: a prefix trie over configurations.
//!
//! Each configuration walks down one child per element; the outcome is
//! stored at the node reached after consuming the whole configuration.
//! For `([1,2,3], PASS)`, `([1,2], FAIL)`, `([1,4,5], FAIL)`:
//!
//! ```text
//!      (2, FAIL)--(3, PASS)
//!     /
//! (1, -)
//!     \
//!      (4, -)--(5, FAIL)
//! ```
//!
//! # Canonicalization
//!
//! Keys are the configuration's element sequence as stored; nothing is
//! sorted at insertion or lookup. The engine builds every candidate by
//! order-preserving `minus`/`union` over one underlying sequence, so equal
//! multisets always carry equal orderings, and for position-tagged elements
//! that ordering coincides with ascending `Ord` order. The superset and
//! subset walks assume that ascending order; they are only consulted under
//! the opt-in monotonicity mode, which is therefore incompatible with
//! constructions that shuffle element order (such as the maximizer's
//! prepend variant).

use faultline_core::{Config, Element, Outcome};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Memoized oracle outcomes, indexed by configuration
#[derive(Debug, Clone)]
pub struct OutcomeCache<E: Element> {
    root: Node<E>,
}

#[derive(Debug, Clone)]
struct Node<E: Element> {
    outcome: Option<Outcome>,
    children: BTreeMap<E, Node<E>>,
}

impl<E: Element> Node<E> {
    fn new() -> Self {
        Self {
            outcome: None,
            children: BTreeMap::new(),
        }
    }

    /// First outcome found at this node or anywhere below it
    fn any_outcome(&self) -> Option<Outcome> {
        if let Some(outcome) = self.outcome {
            return Some(outcome);
        }
        self.children.values().find_map(Node::any_outcome)
    }

    fn lookup_superset(&self, elems: &[E], start: usize) -> Option<Outcome> {
        if start >= elems.len() {
            // Input consumed: any entry at or below this node is a superset.
            return self.any_outcome();
        }

        // Prefer the exact branch.
        if let Some(child) = self.children.get(&elems[start]) {
            if let Some(outcome) = child.lookup_superset(elems, start + 1) {
                return Some(outcome);
            }
        }

        // Fall back to branches holding extra, smaller elements: the entry
        // may still contain `elems[start]` further down.
        self.children
            .range((Bound::Unbounded, Bound::Excluded(&elems[start])))
            .rev()
            .find_map(|(_, child)| child.lookup_superset(elems, start))
    }
}

impl<E: Element> OutcomeCache<E> {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Insert (or overwrite) the outcome recorded for `config`
    pub fn add(&mut self, config: &Config<E>, outcome: Outcome) {
        let mut node = &mut self.root;
        for elem in config.iter() {
            node = node.children.entry(elem.clone()).or_insert_with(Node::new);
        }
        node.outcome = Some(outcome);
    }

    /// Exact lookup
    #[must_use]
    pub fn lookup(&self, config: &Config<E>) -> Option<Outcome> {
        let mut node = &self.root;
        for elem in config.iter() {
            node = node.children.get(elem)?;
        }
        node.outcome
    }

    /// Outcome of some cached superset of `config` (or `config` itself).
    ///
    /// Valid only under the monotonicity assumption: a `PASS` found here may
    /// be used to short-circuit a test. If several supersets are cached an
    /// arbitrary one is reported.
    #[must_use]
    pub fn lookup_superset(&self, config: &Config<E>) -> Option<Outcome> {
        self.root.lookup_superset(config.as_slice(), 0)
    }

    /// Outcome of some cached subset of `config` (or `config` itself).
    ///
    /// Valid only under the monotonicity assumption: a `FAIL` found here may
    /// be used to short-circuit a test.
    #[must_use]
    pub fn lookup_subset(&self, config: &Config<E>) -> Option<Outcome> {
        let mut node = &self.root;
        for elem in config.iter() {
            if let Some(child) = node.children.get(elem) {
                node = child;
            }
        }
        node.outcome
    }
}

impl<E: Element> Default for OutcomeCache<E> {
    fn default() -> Self {
        Self::new()
    }
}
