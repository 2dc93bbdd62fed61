//! Configurations: ordered element sequences with multiset algebra.
//!
//! Order is significant for display and for cache keys, but the set algebra
//! (`minus`, `union`, `intersect`, `is_subset`) operates on multiset
//! membership. All operations build a new configuration; a configuration is
//! never mutated once handed to a cache or an oracle.

use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered sequence of elements representing one test input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config<E: Element> {
    elems: Vec<E>,
}

impl<E: Element> Config<E> {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// True if the configuration holds no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Iterate over elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elems.iter()
    }

    /// View the elements as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elems
    }

    /// Multiset count of each distinct element
    fn counts(&self) -> BTreeMap<&E, usize> {
        let mut counts = BTreeMap::new();
        for e in &self.elems {
            *counts.entry(e).or_insert(0) += 1;
        }
        counts
    }

    /// Elements of `self` not in `other`, respecting multiplicity.
    ///
    /// Each occurrence in `other` cancels at most one occurrence in `self`;
    /// surviving elements keep their order.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        let mut budget = other.counts();
        let elems = self
            .elems
            .iter()
            .filter(|e| match budget.get_mut(e) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    false
                }
                _ => true,
            })
            .cloned()
            .collect();
        Self { elems }
    }

    /// Multiset union: all of `self`, then the occurrences of `other` that
    /// exceed their multiplicity in `self`, in `other`'s order.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut budget = self.counts();
        let mut extra = Vec::new();
        for e in &other.elems {
            match budget.get_mut(e) {
                Some(count) if *count > 0 => *count -= 1,
                _ => extra.push(e.clone()),
            }
        }
        let mut elems = self.elems.clone();
        elems.extend(extra);
        Self { elems }
    }

    /// Elements of `self` also present in `other`, respecting multiplicity
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut budget = other.counts();
        let elems = self
            .elems
            .iter()
            .filter(|e| match budget.get_mut(e) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            })
            .cloned()
            .collect();
        Self { elems }
    }

    /// True if every occurrence in `self` is covered by `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        let other_counts = other.counts();
        self.counts()
            .iter()
            .all(|(e, count)| other_counts.get(e).is_some_and(|c| c >= count))
    }

    /// Order-preserving concatenation: `self` followed by all of `other`.
    ///
    /// Unlike [`Config::union`] this keeps duplicates; the maximizer's
    /// prepend variant needs it to place a chunk ahead of the seed.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elems = self.elems.clone();
        elems.extend(other.elems.iter().cloned());
        Self { elems }
    }
}

impl<E: Element> Default for Config<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> From<Vec<E>> for Config<E> {
    fn from(elems: Vec<E>) -> Self {
        Self { elems }
    }
}

impl<E: Element> FromIterator<E> for Config<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<E: Element> IntoIterator for Config<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, E: Element> IntoIterator for &'a Config<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}
