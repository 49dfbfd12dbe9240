//! The square letter grid
//!
//! A `Grid` is built once per puzzle, either by the generator or from
//! externally authored rows, and is read-only for the lifetime of the
//! session that uses it.

use std::fmt;
use std::ops::Index;

use ndarray::Array2;

use super::Cell;

/// An error raised when building a grid from authored rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's letter count does not match the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Letter count the row was expected to have.
        expected: usize,
        /// Letter count the row actually has.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {row} has {actual} letters, expected {expected} for a square grid"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square grid of uppercase letters, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: Array2<char>,
}

impl Grid {
    /// Build a grid from authored rows of letters
    ///
    /// Each row must contain exactly as many letters as there are rows.
    /// Letters are normalized to ASCII uppercase.
    ///
    /// # Errors
    /// Returns [`GridError::NotSquare`] if any row's length differs from
    /// the row count.
    ///
    /// # Examples
    /// ```
    /// use wordseek::core::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&["cat", "XXX", "XXX"]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.letter(Cell::new(0, 1)), Some('A'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut letters = Array2::from_elem((size, size), ' ');
        for (row, text) in rows.iter().enumerate() {
            let row_letters: Vec<char> = text.as_ref().chars().collect();
            if row_letters.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    actual: row_letters.len(),
                });
            }
            for (col, letter) in row_letters.into_iter().enumerate() {
                letters[[row, col]] = letter.to_ascii_uppercase();
            }
        }
        Ok(Self { letters })
    }

    /// Wrap a fully-populated square letter array.
    pub(crate) fn from_letters(letters: Array2<char>) -> Self {
        debug_assert_eq!(letters.nrows(), letters.ncols());
        Self { letters }
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.letters.nrows()
    }

    /// Whether `cell` lies inside the grid
    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size() && cell.col < self.size()
    }

    /// The letter at `cell`, or `None` when the cell is out of bounds
    #[inline]
    #[must_use]
    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.letters.get([cell.row, cell.col]).copied()
    }

    /// Read the letters along a path of cells as a string
    ///
    /// Returns `None` if any cell of the path lies outside the grid.
    #[must_use]
    pub fn read_path(&self, path: &[Cell]) -> Option<String> {
        path.iter().map(|&cell| self.letter(cell)).collect()
    }
}

impl Index<Cell> for Grid {
    type Output = char;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.letters[[cell.row, cell.col]]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.letters.rows() {
            for letter in row {
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_normalizes_to_uppercase() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(grid.letter(Cell::new(0, 0)), Some('A'));
        assert_eq!(grid.letter(Cell::new(1, 1)), Some('D'));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = Grid::from_rows(&["abc", "de", "fgh"]);
        assert_eq!(
            result,
            Err(GridError::NotSquare {
                row: 1,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn from_rows_rejects_too_many_columns() {
        let result = Grid::from_rows(&["abcd", "efgh"]);
        assert!(matches!(result, Err(GridError::NotSquare { row: 0, .. })));
    }

    #[test]
    fn empty_grid_is_permitted_and_inert() {
        let rows: [&str; 0] = [];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.size(), 0);
        assert!(!grid.contains(Cell::new(0, 0)));
    }

    #[test]
    fn letter_is_none_out_of_bounds() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(grid.letter(Cell::new(2, 0)), None);
        assert_eq!(grid.letter(Cell::new(0, 2)), None);
    }

    #[test]
    fn read_path_spells_the_letters_in_order() {
        let grid = Grid::from_rows(&["CAT", "XXX", "XXX"]).unwrap();
        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        assert_eq!(grid.read_path(&path), Some("CAT".to_string()));
    }

    #[test]
    fn read_path_is_none_when_any_cell_is_outside() {
        let grid = Grid::from_rows(&["CAT", "XXX", "XXX"]).unwrap();
        let path = [Cell::new(0, 2), Cell::new(0, 3)];
        assert_eq!(grid.read_path(&path), None);
    }

    #[test]
    fn index_by_cell() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(grid[Cell::new(1, 0)], 'C');
    }

    #[test]
    fn display_renders_one_row_per_line() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(format!("{grid}"), "AB\nCD\n");
    }
}
