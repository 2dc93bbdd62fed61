//! Alignment of a seed configuration onto a bound's element stream.
//!
//! The maximizer requires its failing seed to be a sub-multiset of the
//! passing bound. When the two configurations originate from different
//! literal sequences (say, two unrelated strings) the seed's identities
//! never occur in the bound, even though its *values* do. Alignment rebinds
//! the seed onto the bound: each seed element is matched, left to right,
//! against the next unused bound element carrying the same value, and the
//! bound's element is adopted.

use crate::error::{EngineError, EngineResult};
use faultline_core::{Config, Valued};

/// Rebind `seed` onto elements of `bound` by greedy value matching.
///
/// # Errors
///
/// Returns [`EngineError::AlignmentFailed`] if some seed element has no
/// remaining value match in the bound — a partially aligned configuration
/// would violate the maximizer's subset invariant, so none is produced.
pub fn align<E: Valued>(seed: &Config<E>, bound: &Config<E>) -> EngineResult<Config<E>> {
    let bound_elems = bound.as_slice();
    let mut cursor = 0;
    let mut aligned = Vec::with_capacity(seed.len());

    for (index, elem) in seed.iter().enumerate() {
        while cursor < bound_elems.len() && bound_elems[cursor].value() != elem.value() {
            cursor += 1;
        }
        let Some(matched) = bound_elems.get(cursor) else {
            return Err(EngineError::AlignmentFailed { index });
        };
        aligned.push(matched.clone());
        cursor += 1;
    }

    Ok(Config::from(aligned))
}
