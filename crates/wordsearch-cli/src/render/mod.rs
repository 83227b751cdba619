//! Output formats for a finished puzzle.
//!
//! The typeset and plain-text formats share one layout: an optional
//! solution grid, the puzzle grid, then the word list. They implement
//! [`Sections`] and get [`Renderer`] for free. JSON writes one document
//! and implements [`Renderer`] directly.

mod ascii;
mod json;
mod latex;
mod postscript;

pub use ascii::Ascii;
pub use json::Json;
pub use latex::Latex;
pub use postscript::PostScript;

use std::io::{self, Write};
use wordsearch_core::{Grid, Puzzle, Word};

/// Words per line in the printed word list
pub const WORDS_PER_LINE: usize = 3;

/// Which parts of the puzzle to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print the solution grid before the puzzle
    pub solution: bool,
    /// Print the word list after the puzzle
    pub word_list: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            solution: false,
            word_list: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[value(name = "postscript", alias = "ps")]
    PostScript,
    Latex,
    Ascii,
    Json,
}

impl OutputFormat {
    pub fn renderer(self, font_size: u32) -> Box<dyn Renderer> {
        match self {
            OutputFormat::PostScript => Box::new(PostScript::new(font_size)),
            OutputFormat::Latex => Box::new(Latex),
            OutputFormat::Ascii => Box::new(Ascii),
            OutputFormat::Json => Box::new(Json),
        }
    }
}

/// Writes a puzzle in some output format
pub trait Renderer {
    fn render(&self, puzzle: &Puzzle, options: &RenderOptions, out: &mut dyn Write)
        -> io::Result<()>;
}

/// Per-section hooks for page-oriented formats
pub trait Sections {
    fn prologue(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// One grid; `solution` marks the solution view
    fn grid(&self, out: &mut dyn Write, grid: &Grid, solution: bool) -> io::Result<()>;

    fn word_list(&self, out: &mut dyn Write, words: &[&Word]) -> io::Result<()>;

    fn epilogue(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Sections> Renderer for T {
    fn render(
        &self,
        puzzle: &Puzzle,
        options: &RenderOptions,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        self.prologue(out)?;
        if options.solution {
            self.grid(out, &puzzle.solution, true)?;
        }
        self.grid(out, &puzzle.grid, false)?;
        if options.word_list {
            let words: Vec<&Word> = puzzle.words().collect();
            self.word_list(out, &words)?;
        }
        self.epilogue(out)
    }
}
