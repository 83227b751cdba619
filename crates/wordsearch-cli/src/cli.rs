use clap::Parser;
use std::path::PathBuf;
use wordsearch_core::{PuzzleConfig, WordListConfig, WordOrder};

use crate::render::{OutputFormat, RenderOptions};

/// PostScript font size used when none (or an out-of-range one) is given
pub const DEFAULT_FONT_SIZE: u32 = 18;

/// Build a word-search puzzle from a list of words.
///
/// Words are read one per line from INFILE (or stdin) up to the first blank
/// line. Output goes to OUTFILE (or stdout), in PostScript unless another
/// format is chosen.
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsearch", author, version, about)]
pub struct Cli {
    /// Maximum number of words to read
    #[arg(short = 'w', long, default_value_t = 30)]
    pub max_words: usize,

    /// Maximum word length; longer words are truncated
    #[arg(short = 'm', long, default_value_t = 15)]
    pub max_word_len: usize,

    /// Width and height of the grid
    #[arg(short = 'g', long, default_value_t = 20)]
    pub grid_size: usize,

    /// Random placement tries per word
    #[arg(long, default_value_t = 100)]
    pub max_attempts: usize,

    /// Also output the solution
    #[arg(short = 's', long)]
    pub solution: bool,

    /// Do not output the word list
    #[arg(short = 'n', long)]
    pub no_word_list: bool,

    /// PostScript output (default)
    #[arg(short = 'p', long, conflicts_with_all = ["latex", "ascii", "format"])]
    pub postscript: bool,

    /// LaTeX output
    #[arg(short = 'l', long, conflicts_with_all = ["ascii", "format"])]
    pub latex: bool,

    /// ASCII output
    #[arg(short = 'a', long, conflicts_with = "format")]
    pub ascii: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// PostScript font size (1-48)
    #[arg(short = 'f', long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: u32,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Place the longest words first
    #[arg(long)]
    pub longest_first: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Word list file (default: stdin)
    pub infile: Option<PathBuf>,

    /// Output file (default: stdout)
    pub outfile: Option<PathBuf>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            format
        } else if self.latex {
            OutputFormat::Latex
        } else if self.ascii {
            OutputFormat::Ascii
        } else {
            OutputFormat::PostScript
        }
    }

    /// Font size, falling back to the default outside 1..=48
    pub fn effective_font_size(&self) -> u32 {
        if (1..=48).contains(&self.font_size) {
            self.font_size
        } else {
            log::warn!(
                "font size {} out of range, using {DEFAULT_FONT_SIZE}",
                self.font_size
            );
            DEFAULT_FONT_SIZE
        }
    }

    pub fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig {
            grid_size: self.grid_size,
            max_attempts: self.max_attempts,
            order: if self.longest_first {
                WordOrder::LongestFirst
            } else {
                WordOrder::Input
            },
        }
    }

    pub fn word_list_config(&self) -> WordListConfig {
        WordListConfig {
            max_words: self.max_words,
            max_word_len: self.max_word_len,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            solution: self.solution,
            word_list: !self.no_word_list,
        }
    }
}
