//! Selection tracking and word matching
//!
//! One [`SelectionEngine`] per puzzle session. A host translates its
//! pointer events into [`begin`](SelectionEngine::begin) /
//! [`extend`](SelectionEngine::extend) /
//! [`finalize`](SelectionEngine::finalize) calls and reacts to the
//! returned outcomes; every operation is total, so stray input never
//! raises an error.

mod engine;
mod outcome;

pub use engine::{SelectionEngine, SessionError};
pub use outcome::{ExtendOutcome, MatchStatus, SelectionResult};
