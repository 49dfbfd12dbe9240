//! Randomized word placement
//!
//! The generator places each word with independent random retries: draw
//! a direction and a start cell, keep the first draw whose span stays in
//! bounds and collides only on agreeing letters, and commit it. There is
//! no cross-word backtracking; a word that cannot be placed within its
//! attempt budget fails the whole call, and the caller decides whether
//! to retry at a larger size.

use std::fmt;

use log::debug;
use ndarray::Array2;
use rand::Rng;

use super::options::GridOptions;
use crate::core::{Cell, Direction, Grid, Placement};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error type for failed grid generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The word list is empty.
    EmptyWordList,
    /// The word list contains an empty word.
    EmptyWord,
    /// The configured size cannot fit the longest word.
    SizeTooSmall {
        /// The configured (or defaulted) grid size.
        size: usize,
        /// Length of the longest word.
        longest: usize,
    },
    /// The configured direction set is empty.
    NoDirections,
    /// A word could not be placed within the attempt budget.
    PlacementExhausted {
        /// The word that failed to place.
        word: String,
        /// The exhausted attempt budget.
        attempts: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "word list is empty"),
            Self::EmptyWord => write!(f, "word list contains an empty word"),
            Self::SizeTooSmall { size, longest } => {
                write!(f, "grid size {size} cannot fit a word of {longest} letters")
            }
            Self::NoDirections => write!(f, "no placement directions configured"),
            Self::PlacementExhausted { word, attempts } => {
                write!(f, "unable to place {word:?} within {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// A filled puzzle grid together with the placements that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The fully-populated letter grid.
    pub grid: Grid,
    /// Side length the grid was generated at.
    pub size: usize,
    /// One committed placement per input word, in input order.
    pub placements: Vec<Placement>,
}

/// Places a word list onto a square grid of random filler letters.
///
/// Randomness is injectable: [`generate_with`](Self::generate_with)
/// takes any [`Rng`], so a seeded generator reproduces the same grid
/// every time. [`generate`](Self::generate) draws from the thread rng.
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    options: GridOptions,
}

impl GridGenerator {
    /// Create a generator with the given options
    #[must_use]
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    /// The options this generator was built with
    #[must_use]
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Generate a grid using the ambient thread rng
    ///
    /// # Errors
    /// See [`generate_with`](Self::generate_with).
    pub fn generate<S: AsRef<str>>(&self, words: &[S]) -> Result<GeneratedGrid, GenerateError> {
        self.generate_with(words, &mut rand::rng())
    }

    /// Generate a grid drawing all randomness from `rng`
    ///
    /// Words are uppercased, then placed in input order; duplicates are
    /// not collapsed. Every cell no word covers is filled with a random
    /// letter `A`-`Z`.
    ///
    /// # Errors
    /// - [`GenerateError::EmptyWordList`] for an empty word list.
    /// - [`GenerateError::EmptyWord`] if any word has no letters.
    /// - [`GenerateError::SizeTooSmall`] if the configured size cannot
    ///   fit the longest word.
    /// - [`GenerateError::NoDirections`] for an empty direction set.
    /// - [`GenerateError::PlacementExhausted`] when a word finds no valid
    ///   spot within the attempt budget. The call fails as a whole; no
    ///   partial grid is returned. Retrying at a larger size is the
    ///   caller's policy.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordseek::generator::GridGenerator;
    ///
    /// let generator = GridGenerator::default();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let puzzle = generator.generate_with(&["RUST", "GRID"], &mut rng).unwrap();
    /// assert_eq!(puzzle.size, 4);
    /// assert_eq!(puzzle.placements.len(), 2);
    /// ```
    pub fn generate_with<S, R>(
        &self,
        words: &[S],
        rng: &mut R,
    ) -> Result<GeneratedGrid, GenerateError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }
        let words: Vec<String> = words
            .iter()
            .map(|word| word.as_ref().to_ascii_uppercase())
            .collect();
        if words.iter().any(String::is_empty) {
            return Err(GenerateError::EmptyWord);
        }
        let longest = words.iter().map(|word| word.chars().count()).max().unwrap_or(0);
        let size = self.options.size.unwrap_or(longest);
        if size < longest {
            return Err(GenerateError::SizeTooSmall { size, longest });
        }
        if self.options.directions.is_empty() {
            return Err(GenerateError::NoDirections);
        }

        let mut working: Array2<Option<char>> = Array2::from_elem((size, size), None);
        let mut placements = Vec::with_capacity(words.len());
        for word in &words {
            let placement = self.place_word(word, size, &mut working, rng)?;
            placements.push(placement);
        }

        let mut unset = 0usize;
        let letters = working.map(|&slot| {
            slot.unwrap_or_else(|| {
                unset += 1;
                ALPHABET[rng.random_range(0..ALPHABET.len())] as char
            })
        });
        debug!("filled {unset} free cells with random letters");

        Ok(GeneratedGrid {
            grid: Grid::from_letters(letters),
            size,
            placements,
        })
    }

    /// Retry random (direction, start) draws until `word` fits.
    fn place_word<R: Rng + ?Sized>(
        &self,
        word: &str,
        size: usize,
        working: &mut Array2<Option<char>>,
        rng: &mut R,
    ) -> Result<Placement, GenerateError> {
        let letters: Vec<char> = word.chars().collect();
        let directions = &self.options.directions;
        for attempt in 1..=self.options.max_attempts_per_word {
            let direction = directions[rng.random_range(0..directions.len())];
            let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
            let Some(span) = span_cells(start, direction, letters.len(), size) else {
                continue;
            };
            let agrees = span
                .iter()
                .zip(&letters)
                .all(|(cell, letter)| match working[[cell.row, cell.col]] {
                    None => true,
                    Some(existing) => existing == *letter,
                });
            if !agrees {
                continue;
            }
            for (cell, letter) in span.iter().zip(&letters) {
                working[[cell.row, cell.col]] = Some(*letter);
            }
            let placement = Placement::new(word, start, direction);
            debug!("placed {placement} on attempt {attempt}");
            return Ok(placement);
        }
        Err(GenerateError::PlacementExhausted {
            word: word.to_string(),
            attempts: self.options.max_attempts_per_word,
        })
    }
}

/// The cells a word of `len` letters would occupy from `start` heading
/// `direction`, or `None` if any of them falls outside a `size` grid.
fn span_cells(start: Cell, direction: Direction, len: usize, size: usize) -> Option<Vec<Cell>> {
    let mut cells = Vec::with_capacity(len);
    for i in 0..len {
        let cell = start.step(direction, i)?;
        if cell.row >= size || cell.col >= size {
            return None;
        }
        cells.push(cell);
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn generate_seeded(words: &[&str], options: GridOptions, seed: u64) -> GeneratedGrid {
        GridGenerator::new(options)
            .generate_with(words, &mut StdRng::seed_from_u64(seed))
            .unwrap()
    }

    #[test]
    fn every_placement_spells_its_word_in_bounds() {
        let words = ["STREAM", "LANTERN", "ORBIT", "CANDLE", "FERN"];
        for seed in 0..25 {
            let puzzle = generate_seeded(&words, GridOptions::default(), seed);
            assert_eq!(puzzle.placements.len(), words.len());
            for placement in &puzzle.placements {
                let cells = placement.cells();
                assert!(cells.iter().all(|&cell| puzzle.grid.contains(cell)));
                assert_eq!(
                    puzzle.grid.read_path(&cells).as_deref(),
                    Some(placement.word())
                );
            }
        }
    }

    #[test]
    fn overlapping_placements_agree_on_shared_letters() {
        let words = ["TRACE", "CRATE", "REACT", "CATER"];
        for seed in 0..25 {
            let puzzle = generate_seeded(&words, GridOptions::default(), seed);
            let mut claimed: Vec<(Cell, char)> = Vec::new();
            for placement in &puzzle.placements {
                for (cell, letter) in placement.cells().into_iter().zip(placement.word().chars()) {
                    if let Some((_, existing)) = claimed.iter().find(|(c, _)| *c == cell) {
                        assert_eq!(*existing, letter);
                    } else {
                        claimed.push((cell, letter));
                    }
                }
            }
        }
    }

    #[test]
    fn grid_is_fully_populated_with_uppercase_letters() {
        let puzzle = generate_seeded(&["APPLE", "GRAPE"], GridOptions::default(), 3);
        for row in 0..puzzle.size {
            for col in 0..puzzle.size {
                let letter = puzzle.grid.letter(Cell::new(row, col)).unwrap();
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn size_defaults_to_the_longest_word() {
        let puzzle = generate_seeded(&["CAT", "LANTERN"], GridOptions::default(), 11);
        assert_eq!(puzzle.size, 7);
        assert_eq!(puzzle.grid.size(), 7);
    }

    #[test]
    fn words_are_uppercased_before_placement() {
        let puzzle = generate_seeded(&["kitten"], GridOptions::default(), 5);
        assert_eq!(puzzle.placements[0].word(), "KITTEN");
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let words = ["STREAM", "LANTERN", "ORBIT"];
        let options = GridOptions {
            size: Some(9),
            ..GridOptions::default()
        };
        let first = generate_seeded(&words, options.clone(), 42);
        let second = generate_seeded(&words, options, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn restricted_directions_are_honored() {
        let options = GridOptions {
            directions: vec![Direction::East, Direction::South],
            ..GridOptions::default()
        };
        for seed in 0..10 {
            let puzzle = generate_seeded(&["RIVER", "STONE"], options.clone(), seed);
            for placement in &puzzle.placements {
                assert!(matches!(
                    placement.direction(),
                    Direction::East | Direction::South
                ));
            }
        }
    }

    #[test]
    fn single_letter_word_always_places() {
        let puzzle = generate_seeded(&["A"], GridOptions::default(), 0);
        assert_eq!(puzzle.size, 1);
        assert_eq!(puzzle.grid.letter(Cell::new(0, 0)), Some('A'));
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let words: [&str; 0] = [];
        let result = GridGenerator::default().generate(&words);
        assert_eq!(result, Err(GenerateError::EmptyWordList));
    }

    #[test]
    fn empty_word_is_rejected() {
        let result = GridGenerator::default().generate(&["CAT", ""]);
        assert_eq!(result, Err(GenerateError::EmptyWord));
    }

    #[test]
    fn undersized_grid_is_rejected_before_placing() {
        let options = GridOptions {
            size: Some(3),
            ..GridOptions::default()
        };
        let result = GridGenerator::new(options).generate(&["LONGER"]);
        assert_eq!(
            result,
            Err(GenerateError::SizeTooSmall {
                size: 3,
                longest: 6,
            })
        );
    }

    #[test]
    fn empty_direction_set_is_rejected() {
        let options = GridOptions {
            directions: Vec::new(),
            ..GridOptions::default()
        };
        let result = GridGenerator::new(options).generate(&["CAT"]);
        assert_eq!(result, Err(GenerateError::NoDirections));
    }

    #[test]
    fn impossible_word_set_exhausts_the_budget() {
        // Four disjoint three-letter lines need twelve cells; a 3x3 grid
        // has nine, so some word must fail within its budget.
        let words = ["AAA", "BBB", "CCC", "DDD"];
        let result =
            GridGenerator::default().generate_with(&words, &mut StdRng::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(GenerateError::PlacementExhausted { .. })
        ));
    }
}
