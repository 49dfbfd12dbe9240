//! Generator configuration

use strum::VariantArray;

use crate::core::Direction;

/// Default per-word placement attempt budget.
pub const DEFAULT_MAX_ATTEMPTS_PER_WORD: usize = 1000;

/// Configuration for [`GridGenerator`](super::GridGenerator).
///
/// Plain fields with a `Default`; override what you need with struct
/// update syntax.
///
/// # Examples
/// ```
/// use wordseek::generator::GridOptions;
///
/// let options = GridOptions {
///     size: Some(12),
///     ..GridOptions::default()
/// };
/// assert_eq!(options.directions.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Side length of the grid. `None` defaults to the length of the
    /// longest word. Must be at least the longest word's length.
    pub size: Option<usize>,

    /// Directions words may extend in. Defaults to all eight compass
    /// directions.
    pub directions: Vec<Direction>,

    /// How many random (direction, start) draws to try per word before
    /// giving up on the whole generation.
    pub max_attempts_per_word: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            size: None,
            directions: Direction::VARIANTS.to_vec(),
            max_attempts_per_word: DEFAULT_MAX_ATTEMPTS_PER_WORD,
        }
    }
}
