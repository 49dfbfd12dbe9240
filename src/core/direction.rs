//! Word placement directions
//!
//! The eight compass directions a word can extend in. Each direction is a
//! unit step expressed as a `(row, col)` delta with both components in
//! `{-1, 0, 1}` and never both zero.

use strum::VariantArray;

/// One of the eight compass directions, diagonals included.
///
/// `Direction::VARIANTS` is the canonical direction set the generator
/// draws from when no subset is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray)]
pub enum Direction {
    /// Columns increase.
    East,
    /// Columns decrease.
    West,
    /// Rows increase.
    South,
    /// Rows decrease.
    North,
    /// Rows and columns increase.
    SouthEast,
    /// Rows increase, columns decrease.
    SouthWest,
    /// Rows decrease, columns increase.
    NorthEast,
    /// Rows and columns decrease.
    NorthWest,
}

impl Direction {
    /// The unit step for this direction as a `(row, col)` delta
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::East => (0, 1),
            Self::West => (0, -1),
            Self::South => (1, 0),
            Self::North => (-1, 0),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (1, -1),
            Self::NorthEast => (-1, 1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// The opposite compass direction
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::South => Self::North,
            Self::North => Self::South,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
        }
    }
}
