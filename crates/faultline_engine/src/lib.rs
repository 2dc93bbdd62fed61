//! FAULTLINE Delta-Debugging Engine
//!
//! Given an oracle classifying a configuration as PASS, FAIL, or UNRESOLVED,
//! computes a 1-minimal failure-inducing difference between a passing and a
//! failing configuration, and a maximal failing configuration with respect
//! to a passing bound.
//!
//! The engine is single-threaded and synchronous; the only potentially slow
//! operation is the oracle call, which callers own entirely (including any
//! timeout handling). All drivers are explicit loops over a small owned
//! state record, so arbitrarily large configurations never grow the call
//! stack.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod align;
pub mod cache;
pub mod error;
pub mod maximize;
pub mod minimize;
pub mod oracle;
pub mod relevance;
mod resolve;
pub mod session;
pub mod split;
pub mod stats;

pub use align::align;
pub use cache::OutcomeCache;
pub use error::{EngineError, EngineResult};
pub use maximize::Maximized;
pub use minimize::Minimized;
pub use oracle::Oracle;
pub use relevance::RelevantDeltas;
pub use session::{Reducer, SessionOptions};
pub use split::{ChunkSplitter, Splitter};
pub use stats::OracleStats;
