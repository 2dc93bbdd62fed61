//! Element traits.
//!
//! An element is the opaque unit a configuration is made of: a character,
//! a token, a line, an index-tagged symbol. The engine only ever compares,
//! orders, and clones elements.

use std::fmt::Debug;

/// Unit of a configuration.
///
/// Blanket-implemented: any equality-comparable, orderable, cloneable type
/// that owns its data qualifies. `Ord` is required by the outcome cache,
/// whose superset and subset walks rely on a total order over trie keys.
pub trait Element: Clone + Eq + Ord + Debug + 'static {}

impl<T: Clone + Eq + Ord + Debug + 'static> Element for T {}

/// An element whose identity splits into a position and an oracle-relevant
/// value.
///
/// Alignment (growing a failing seed toward a bound built from a different
/// literal sequence) matches elements by *value* while preserving the
/// bound's identities. Plain elements are their own value.
pub trait Valued: Element {
    /// The oracle-relevant part of the element
    type Value: PartialEq;

    /// Extract the value
    fn value(&self) -> Self::Value;
}

macro_rules! self_valued {
    ($($t:ty),* $(,)?) => {
        $(impl Valued for $t {
            type Value = $t;

            fn value(&self) -> $t {
                *self
            }
        })*
    };
}

self_valued!(char, u8, u16, u32, u64, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_element<E: Element>() {}

    #[test]
    fn test_blanket_element_impl() {
        assert_element::<char>();
        assert_element::<u32>();
        assert_element::<String>();
        assert_element::<(usize, char)>();
    }

    #[test]
    fn test_self_valued() {
        assert_eq!('x'.value(), 'x');
        assert_eq!(7u32.value(), 7);
    }
}
