//! Word-search puzzle engine.
//!
//! Words are laid into a square grid rightward, downward or diagonally
//! down-right, each with a bounded number of random tries, and the leftover
//! cells are filled with random letters.
//!
//! ```
//! use wordsearch_core::{PuzzleBuilder, PuzzleConfig, Word};
//!
//! let words: Vec<Word> = ["cat", "dog"].iter().map(|w| Word::new(w).unwrap()).collect();
//! let config = PuzzleConfig { grid_size: 8, ..PuzzleConfig::default() };
//! let puzzle = PuzzleBuilder::with_config_and_seed(config, 7).build(&words).unwrap();
//! assert!(puzzle.grid.is_complete());
//! ```

mod builder;
pub mod error;
mod grid;
mod placer;
mod random;
mod word;

pub use builder::{Puzzle, PuzzleBuilder, PuzzleConfig, WordOrder};
pub use error::{PuzzleError, Result};
pub use grid::{Grid, Position, MAX_GRID_SIZE};
pub use placer::{Direction, GridPlacer, Placement};
pub use random::{PcgRandom, RandomSource};
pub use word::{read_words, Word, WordListConfig};
