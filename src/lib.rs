//! Word-search puzzle core
//!
//! The two halves of a word-search puzzle, with no rendering or input
//! handling attached: a [`generator`] that places a word list onto a
//! square letter grid with randomized retries, and a [`session`] engine
//! that tracks a player's cell-by-cell selection gesture and resolves it
//! against the placed words. A host UI translates pointer events into
//! cell coordinates on the way in and turns the returned outcomes into
//! highlighting and feedback on the way out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordseek::core::{Cell, Grid, TargetWord};
//! use wordseek::session::SelectionEngine;
//!
//! // A fixed grid with one authored word path.
//! let grid = Grid::from_rows(&["CAT", "XXX", "XXX"]).unwrap();
//! let cat = TargetWord::with_path(
//!     "CAT",
//!     vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
//! )
//! .unwrap();
//! let mut session = SelectionEngine::with_targets(grid, vec![cat]).unwrap();
//!
//! // Drag across the top row and let go.
//! session.begin(Cell::new(0, 0));
//! session.extend(Cell::new(0, 1));
//! session.extend(Cell::new(0, 2));
//! let result = session.finalize();
//!
//! assert_eq!(result.status.word(), Some("CAT"));
//! assert!(session.is_found("cat"));
//! ```
//!
//! Generated puzzles work the same way, with the grid and word paths
//! produced by [`generator::GridGenerator`]:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordseek::generator::GridGenerator;
//! use wordseek::session::SelectionEngine;
//!
//! let generator = GridGenerator::default();
//! let mut rng = StdRng::seed_from_u64(7);
//! let puzzle = generator.generate_with(&["RUST", "GRID"], &mut rng).unwrap();
//! let session = SelectionEngine::new(puzzle);
//! assert_eq!(session.targets().len(), 2);
//! ```

// Core domain types
pub mod core;

// Grid generation
pub mod generator;

// Selection tracking and matching
pub mod session;
