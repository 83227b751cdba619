//! Error type shared by every stage of puzzle construction.
//!
//! Each variant carries a stable code for scripts and bug reports:
//!
//! - E001: `NoFitFound` (a word used up its attempt budget)
//! - E002: `WordTooLongForGrid` (no direction can hold the word)
//! - E003: `InvalidConfiguration` (a size or bound is zero)
//! - E004: `InvalidWord` (empty word or non-letter characters)
//! - E005: `EmptyWordList` (nothing to place)
//! - E006: `Io` (reading the word list failed)

use std::io;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("no fit found for \"{word}\" after {attempts} attempts")]
    NoFitFound { word: String, attempts: usize },

    #[error("\"{word}\" ({len} letters) does not fit a {grid_size}x{grid_size} grid")]
    WordTooLongForGrid {
        word: String,
        len: usize,
        grid_size: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid word \"{word}\": {reason}")]
    InvalidWord { word: String, reason: String },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

impl PuzzleError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::NoFitFound { .. } => "E001",
            PuzzleError::WordTooLongForGrid { .. } => "E002",
            PuzzleError::InvalidConfiguration(_) => "E003",
            PuzzleError::InvalidWord { .. } => "E004",
            PuzzleError::EmptyWordList => "E005",
            PuzzleError::Io(_) => "E006",
        }
    }

    /// True for the two ways a single word can fail to go into the grid.
    pub fn is_placement_failure(&self) -> bool {
        matches!(
            self,
            PuzzleError::NoFitFound { .. } | PuzzleError::WordTooLongForGrid { .. }
        )
    }

    /// The word that could not be placed, if this is a placement failure.
    pub fn failed_word(&self) -> Option<&str> {
        match self {
            PuzzleError::NoFitFound { word, .. } | PuzzleError::WordTooLongForGrid { word, .. } => {
                Some(word)
            }
            _ => None,
        }
    }
}
