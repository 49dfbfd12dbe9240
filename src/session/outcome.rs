//! Selection outcome types
//!
//! Every selection operation reports what it did instead of erroring:
//! gesture input is noisy by nature, so stray events degrade to
//! [`ExtendOutcome::Ignored`] or an empty [`SelectionResult`] rather
//! than destabilizing the session.

use crate::core::Cell;

/// What a call to `extend` did to the live path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendOutcome {
    /// The cell was appended to the path.
    Appended,
    /// The cell was the previous one; the last step was undone.
    Backtracked,
    /// The cell was visited earlier; the path snapped back to it.
    Truncated,
    /// Nothing changed (same cell, a jump, out of bounds, or no active
    /// selection).
    Ignored,
}

/// How a finalized path resolved against the target words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    /// The path identified a word not found before; it is now recorded.
    NewMatch(String),
    /// The path identified a word that was already found; no state
    /// changed.
    AlreadyFound(String),
    /// The path identified no target word.
    NoMatch,
}

impl MatchStatus {
    /// The matched word, if the path identified one
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::NewMatch(word) | Self::AlreadyFound(word) => Some(word),
            Self::NoMatch => None,
        }
    }

    /// Whether this is a first-time find
    #[inline]
    #[must_use]
    pub const fn is_new_match(&self) -> bool {
        matches!(self, Self::NewMatch(_))
    }
}

/// The result of finalizing a selection gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    /// How the path resolved.
    pub status: MatchStatus,
    /// The path as it stood when the gesture ended.
    pub path: Vec<Cell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_word_accessor() {
        assert_eq!(MatchStatus::NewMatch("CAT".into()).word(), Some("CAT"));
        assert_eq!(MatchStatus::AlreadyFound("CAT".into()).word(), Some("CAT"));
        assert_eq!(MatchStatus::NoMatch.word(), None);
    }

    #[test]
    fn only_new_match_reports_as_new() {
        assert!(MatchStatus::NewMatch("CAT".into()).is_new_match());
        assert!(!MatchStatus::AlreadyFound("CAT".into()).is_new_match());
        assert!(!MatchStatus::NoMatch.is_new_match());
    }
}
