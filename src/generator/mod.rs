//! Puzzle grid generation
//!
//! Greedy randomized placement with a per-word retry budget: each word
//! draws random (direction, start) pairs until one fits, then commits.
//! There is no global backtracking, so dense word sets can legitimately
//! fail — the failure is surfaced as an error rather than hidden, and
//! callers retry with a larger [`GridOptions::size`] if they want.

mod engine;
mod options;

pub use engine::{GenerateError, GeneratedGrid, GridGenerator};
pub use options::{DEFAULT_MAX_ATTEMPTS_PER_WORD, GridOptions};
