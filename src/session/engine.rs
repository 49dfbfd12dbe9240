//! Live selection tracking and word matching
//!
//! A `SelectionEngine` owns one puzzle session: the immutable grid and
//! target set, the set of words found so far, per-cell availability
//! counters, and the in-progress selection path. A host drives it by
//! translating its pointer or touch events into discrete cell-enter
//! calls; the engine never renders and never errors on noisy input.

use std::fmt;

use ndarray::Array2;
use rustc_hash::FxHashSet;

use super::outcome::{ExtendOutcome, MatchStatus, SelectionResult};
use crate::core::{Cell, Grid, TargetWord};
use crate::generator::GeneratedGrid;

/// Error type for invalid session construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A target word's path leaves the grid.
    CellOutOfBounds {
        /// The word whose path is invalid.
        word: String,
        /// The first out-of-bounds cell.
        cell: Cell,
    },
    /// A target word's path does not spell the word, forward or backward.
    LettersDisagree {
        /// The word whose path is invalid.
        word: String,
        /// What the path actually spells, read forward.
        spelled: String,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { word, cell } => {
                write!(f, "path cell {cell} for {word:?} is outside the grid")
            }
            Self::LettersDisagree { word, spelled } => {
                write!(f, "path for {word:?} spells {spelled:?}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Tracks one puzzle session: the live selection gesture, found words,
/// and per-cell availability.
///
/// One engine per concurrent puzzle; the state machine holds at most one
/// active gesture, and a new `begin` while a gesture is active simply
/// replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEngine {
    grid: Grid,
    targets: Vec<TargetWord>,
    found: FxHashSet<usize>,
    availability: Array2<u32>,
    path: Vec<Cell>,
    active: bool,
}

impl SelectionEngine {
    /// Build a session from generator output
    ///
    /// Every target carries its placement-derived cell path, so matching
    /// is by exact path identity.
    #[must_use]
    pub fn new(puzzle: GeneratedGrid) -> Self {
        let targets = puzzle
            .placements
            .iter()
            .map(TargetWord::from_placement)
            .collect();
        Self::build(puzzle.grid, targets)
    }

    /// Build a session over a fixed grid with explicit targets
    ///
    /// Targets with authored paths are matched by path identity; targets
    /// without paths fall back to letter matching.
    ///
    /// # Errors
    /// Returns [`SessionError`] if any authored path leaves the grid or
    /// spells something other than its word (forward or backward).
    pub fn with_targets(grid: Grid, targets: Vec<TargetWord>) -> Result<Self, SessionError> {
        for target in &targets {
            let Some(path) = target.path() else { continue };
            for &cell in path {
                if !grid.contains(cell) {
                    return Err(SessionError::CellOutOfBounds {
                        word: target.text().to_string(),
                        cell,
                    });
                }
            }
            let spelled: String = path.iter().filter_map(|&cell| grid.letter(cell)).collect();
            let reversed: String = spelled.chars().rev().collect();
            if spelled != target.text() && reversed != target.text() {
                return Err(SessionError::LettersDisagree {
                    word: target.text().to_string(),
                    spelled,
                });
            }
        }
        Ok(Self::build(grid, targets))
    }

    fn build(grid: Grid, targets: Vec<TargetWord>) -> Self {
        let availability = usage_counts(&grid, &targets);
        Self {
            grid,
            targets,
            found: FxHashSet::default(),
            availability,
            path: Vec::new(),
            active: false,
        }
    }

    /// Start a selection gesture at `cell`
    ///
    /// Replaces any gesture already in progress. Beginning on an
    /// out-of-bounds cell leaves the engine idle.
    pub fn begin(&mut self, cell: Cell) {
        self.path.clear();
        self.active = false;
        if self.grid.contains(cell) {
            self.path.push(cell);
            self.active = true;
        }
    }

    /// Feed the next cell the gesture entered
    ///
    /// Re-entering the immediately preceding cell undoes the last step;
    /// re-entering an older cell snaps the path back to it; a neighbor
    /// of the path's end is appended. Anything else, including calls
    /// while idle, is ignored.
    pub fn extend(&mut self, cell: Cell) -> ExtendOutcome {
        if !self.active {
            return ExtendOutcome::Ignored;
        }
        let Some(&last) = self.path.last() else {
            return ExtendOutcome::Ignored;
        };
        if cell == last {
            return ExtendOutcome::Ignored;
        }
        if self.path.len() >= 2 && self.path[self.path.len() - 2] == cell {
            self.path.pop();
            return ExtendOutcome::Backtracked;
        }
        if let Some(index) = self.path.iter().position(|&visited| visited == cell) {
            self.path.truncate(index + 1);
            return ExtendOutcome::Truncated;
        }
        if self.grid.contains(cell) && last.is_adjacent(cell) {
            self.path.push(cell);
            return ExtendOutcome::Appended;
        }
        ExtendOutcome::Ignored
    }

    /// End the gesture and resolve the path against the target words
    ///
    /// On a first-time match the word is recorded and the availability
    /// count of every cell on its path drops by one. Finalizing while
    /// idle returns a neutral no-match result with an empty path.
    pub fn finalize(&mut self) -> SelectionResult {
        if !self.active {
            return SelectionResult {
                status: MatchStatus::NoMatch,
                path: Vec::new(),
            };
        }
        self.active = false;
        let path = std::mem::take(&mut self.path);
        let status = match self.resolve(&path) {
            Some(index) if self.found.contains(&index) => {
                MatchStatus::AlreadyFound(self.targets[index].text().to_string())
            }
            Some(index) => {
                self.found.insert(index);
                self.consume_cells(index);
                MatchStatus::NewMatch(self.targets[index].text().to_string())
            }
            None => MatchStatus::NoMatch,
        };
        SelectionResult { status, path }
    }

    /// Find the target the path identifies, preferring unfound targets
    /// so duplicated words can each be found once.
    ///
    /// Targets with known paths match by cell-path identity, forward or
    /// reversed; letter comparison is only consulted for targets without
    /// path metadata, because an unrelated run of letters can spell a
    /// target word along the wrong cells.
    fn resolve(&self, path: &[Cell]) -> Option<usize> {
        let mut already_found = None;
        for (index, target) in self.targets.iter().enumerate() {
            let Some(cells) = target.path() else { continue };
            if path_matches(path, cells) {
                if !self.found.contains(&index) {
                    return Some(index);
                }
                already_found.get_or_insert(index);
            }
        }
        if let Some(spelled) = self.grid.read_path(path) {
            let reversed: String = spelled.chars().rev().collect();
            for (index, target) in self.targets.iter().enumerate() {
                if target.path().is_some() {
                    continue;
                }
                if target.text() == spelled || target.text() == reversed {
                    if !self.found.contains(&index) {
                        return Some(index);
                    }
                    already_found.get_or_insert(index);
                }
            }
        }
        already_found
    }

    /// Drop the availability count along a newly found word's path.
    fn consume_cells(&mut self, index: usize) {
        if let Some(cells) = self.targets[index].path() {
            for cell in cells {
                let count = &mut self.availability[[cell.row, cell.col]];
                *count = count.saturating_sub(1);
            }
        }
    }

    /// Whether `word` (case-insensitive) has been found this session
    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        let canonical = word.to_ascii_uppercase();
        self.found
            .iter()
            .any(|&index| self.targets[index].text() == canonical)
    }

    /// How many unfound words still pass through `cell`
    ///
    /// Zero for out-of-bounds cells and for cells on no known word path.
    /// Informational only; matching never consults it.
    #[must_use]
    pub fn cell_availability(&self, cell: Cell) -> u32 {
        self.availability
            .get([cell.row, cell.col])
            .copied()
            .unwrap_or(0)
    }

    /// Whether at least one unfound word still passes through `cell`
    #[inline]
    #[must_use]
    pub fn is_cell_active(&self, cell: Cell) -> bool {
        self.cell_availability(cell) > 0
    }

    /// The in-progress selection path, oldest cell first
    #[inline]
    #[must_use]
    pub fn current_path(&self) -> &[Cell] {
        &self.path
    }

    /// Whether a selection gesture is in progress
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The puzzle grid this session plays on
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The session's target words, in input order
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[TargetWord] {
        &self.targets
    }

    /// The words found so far, in target order
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(index, _)| self.found.contains(index))
            .map(|(_, target)| target.text())
    }

    /// How many target words have been found
    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Whether every target word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }

    /// Start the session over on the same puzzle
    ///
    /// Clears the found set and any live gesture and restores the
    /// initial availability counts; grid and targets are untouched.
    pub fn reset(&mut self) {
        self.found.clear();
        self.path.clear();
        self.active = false;
        self.availability = usage_counts(&self.grid, &self.targets);
    }
}

/// Whether a selection path is exactly a target path, forward or
/// reversed.
fn path_matches(path: &[Cell], cells: &[Cell]) -> bool {
    path.len() == cells.len()
        && (path.iter().eq(cells.iter()) || path.iter().rev().eq(cells.iter()))
}

/// Count, per cell, the target words whose known path occupies it.
fn usage_counts(grid: &Grid, targets: &[TargetWord]) -> Array2<u32> {
    let mut counts = Array2::from_elem((grid.size(), grid.size()), 0_u32);
    for target in targets {
        if let Some(path) = target.path() {
            for cell in path {
                counts[[cell.row, cell.col]] += 1;
            }
        }
    }
    counts
}
