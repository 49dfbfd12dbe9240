//! Committed word placements
//!
//! A `Placement` records where the generator put a word: its text, the
//! starting cell, and the direction the word extends in. The occupied
//! cells are derived, never stored, so a placement stays a small value.

use std::fmt;

use super::{Cell, Direction};

/// A word's committed position on the grid.
///
/// Knowing the exact occupied-cell sequence matters because letter-only
/// matching is ambiguous: an unrelated run of letters elsewhere in the
/// grid can spell the same word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: String,
    start: Cell,
    direction: Direction,
}

impl Placement {
    /// Record a placement of `word` starting at `start` and extending in
    /// `direction`
    #[must_use]
    pub fn new(word: impl Into<String>, start: Cell, direction: Direction) -> Self {
        Self {
            word: word.into(),
            start,
            direction,
        }
    }

    /// The placed word's text
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cell holding the word's first letter
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// The direction the word extends in
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells the placement occupies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether the placement occupies no cells (an empty word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The occupied-cell sequence, `start + i * direction` for each letter
    ///
    /// # Panics
    /// Panics if the span walks off the top or left edge of the quadrant.
    /// Placements produced by the generator are always fully in bounds.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.len())
            .map(|i| {
                self.start
                    .step(self.direction, i)
                    .expect("placement span leaves the grid")
            })
            .collect()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} at {} heading {:?}",
            self.word, self.start, self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_walk_the_direction() {
        let placement = Placement::new("CAT", Cell::new(1, 1), Direction::SouthEast);
        assert_eq!(
            placement.cells(),
            vec![Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)]
        );
    }

    #[test]
    fn cells_for_a_backward_direction() {
        let placement = Placement::new("CAT", Cell::new(0, 2), Direction::West);
        assert_eq!(
            placement.cells(),
            vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]
        );
    }

    #[test]
    fn single_letter_occupies_only_its_start() {
        let placement = Placement::new("A", Cell::new(4, 4), Direction::NorthWest);
        assert_eq!(placement.cells(), vec![Cell::new(4, 4)]);
    }

    #[test]
    #[should_panic(expected = "placement span leaves the grid")]
    fn cells_panic_when_the_span_goes_negative() {
        let placement = Placement::new("CAT", Cell::new(1, 1), Direction::NorthWest);
        let _ = placement.cells();
    }

    #[test]
    fn accessors_round_trip() {
        let placement = Placement::new("WORD", Cell::new(2, 3), Direction::South);
        assert_eq!(placement.word(), "WORD");
        assert_eq!(placement.start(), Cell::new(2, 3));
        assert_eq!(placement.direction(), Direction::South);
        assert_eq!(placement.len(), 4);
        assert!(!placement.is_empty());
    }
}
