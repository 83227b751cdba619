use std::io::{self, Write};
use wordsearch_core::{Grid, Word};

use super::{Sections, WORDS_PER_LINE};

/// Width of one word-list column; longer words widen their own column
const COLUMN_WIDTH: usize = 26;

/// Plain text: one grid row per line
#[derive(Debug, Clone, Copy)]
pub struct Ascii;

impl Sections for Ascii {
    fn grid(&self, out: &mut dyn Write, grid: &Grid, solution: bool) -> io::Result<()> {
        if solution {
            writeln!(out, "Solution:")?;
        }
        write!(out, "{grid}")?;
        writeln!(out)
    }

    fn word_list(&self, out: &mut dyn Write, words: &[&Word]) -> io::Result<()> {
        for line in words.chunks(WORDS_PER_LINE) {
            let text: String = line
                .iter()
                .map(|w| {
                    let width = COLUMN_WIDTH.max(w.len() + 1);
                    format!("{:<width$}", w.as_str())
                })
                .collect();
            writeln!(out, "{}", text.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{render_to_string, sample_puzzle};
    use crate::render::RenderOptions;

    #[test]
    fn test_grid_then_word_list() {
        let puzzle = sample_puzzle();
        let text = render_to_string(&Ascii, &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6 + 1 + 2);
        for (line, row) in lines.iter().zip(puzzle.grid.rows()) {
            assert_eq!(*line, row);
        }
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], format!("{:<26}{:<26}EMU", "CAT", "DOG"));
        assert_eq!(lines[8], "OWL");
    }

    #[test]
    fn test_long_words_stay_separated() {
        let long = Word::new("abcdefghijklmnopqrstuvwxyzab").unwrap();
        let short = Word::new("zzz").unwrap();
        let edge = Word::new(&"q".repeat(COLUMN_WIDTH)).unwrap();

        let mut out = Vec::new();
        Ascii.word_list(&mut out, &[&long, &short, &edge]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            format!(
                "ABCDEFGHIJKLMNOPQRSTUVWXYZAB ZZZ{}{}\n",
                " ".repeat(COLUMN_WIDTH - 3),
                "Q".repeat(COLUMN_WIDTH)
            )
        );
    }

    #[test]
    fn test_solution_first() {
        let puzzle = sample_puzzle();
        let options = RenderOptions {
            solution: true,
            word_list: false,
        };
        let text = render_to_string(&Ascii, &options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Solution:");
        assert_eq!(lines[1..7], puzzle.solution.rows()[..]);
        assert_eq!(lines[7], "");
        assert_eq!(lines[8..14], puzzle.grid.rows()[..]);
        assert_eq!(lines.len(), 15);
    }
}
