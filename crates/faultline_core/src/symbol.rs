//! Index-tagged character symbols.
//!
//! Two occurrences of the same character at different positions must remain
//! distinct elements, otherwise set algebra over a string collapses them.
//! `Symbol` tags each character with its position in the originating text;
//! the `String <-> Config<Symbol>` conversion is a lossless bijection.

use crate::config::Config;
use crate::element::Valued;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One character of a source text, tagged with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Position in the originating text (in characters)
    pub pos: usize,
    /// The character itself
    pub ch: char,
}

impl Symbol {
    /// Create a symbol
    #[must_use]
    pub fn new(pos: usize, ch: char) -> Self {
        Self { pos, ch }
    }
}

impl Valued for Symbol {
    type Value = char;

    fn value(&self) -> char {
        self.ch
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.ch, self.pos)
    }
}

impl Config<Symbol> {
    /// Convert a text into a configuration of position-tagged symbols
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.chars()
            .enumerate()
            .map(|(pos, ch)| Symbol::new(pos, ch))
            .collect()
    }

    /// Reassemble the text carried by this configuration, in element order
    #[must_use]
    pub fn to_text(&self) -> String {
        self.iter().map(|s| s.ch).collect()
    }
}
