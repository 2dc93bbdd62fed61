//! FAULTLINE Core Types
//!
//! Pure vocabulary for delta debugging: outcomes, configurations, and the
//! element traits shared by the engine and its oracles. No I/O, no logic
//! beyond multiset algebra.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod element;
pub mod outcome;
pub mod symbol;

// Re-exports
pub use config::Config;
pub use element::{Element, Valued};
pub use outcome::{Direction, Outcome};
pub use symbol::Symbol;
