use std::io::{self, Write};
use wordsearch_core::{Grid, Word};

use super::{Sections, WORDS_PER_LINE};

/// LaTeX document with a fixed-width cell macro
#[derive(Debug, Clone, Copy)]
pub struct Latex;

impl Sections for Latex {
    fn prologue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\\documentclass[12pt,a4paper]{{article}}")?;
        writeln!(out, "\\oddsidemargin -0.3 in")?;
        writeln!(out, "\\evensidemargin -0.3 in")?;
        writeln!(out, "\\marginparwidth 0.75 in")?;
        writeln!(out, "\\textwidth 7.0 true in")?;
        writeln!(out, "\\pagestyle{{empty}}")?;
        writeln!(out, "\\newcommand{{\\s}}[1]{{\\makebox[1.5em]{{#1}}}}")?;
        writeln!(out, "\\begin{{document}}")?;
        writeln!(out, "\\Large")
    }

    fn grid(&self, out: &mut dyn Write, grid: &Grid, solution: bool) -> io::Result<()> {
        if solution {
            writeln!(out, "\\noindent Solution:")?;
            writeln!(out)?;
            writeln!(out, "\\vspace{{2em}}")?;
            writeln!(out)?;
        }

        writeln!(out, "\\begin{{center}}")?;
        for row in grid.rows() {
            for c in row.chars() {
                write!(out, "\\s{{{c}}}")?;
            }
            writeln!(out)?;
            writeln!(out)?;
        }
        writeln!(out, "\\end{{center}}")?;

        if solution {
            writeln!(out, "\\newpage")?;
        }
        Ok(())
    }

    fn word_list(&self, out: &mut dyn Write, words: &[&Word]) -> io::Result<()> {
        writeln!(out, "\\vspace{{2em}}")?;
        writeln!(out, "\\begin{{center}}")?;
        writeln!(out, "\\begin{{tabular}}{{lll}}")?;
        for line in words.chunks(WORDS_PER_LINE) {
            let cells: Vec<&str> = (0..WORDS_PER_LINE)
                .map(|i| line.get(i).map_or("", |w| w.as_str()))
                .collect();
            writeln!(out, "{} \\\\", cells.join(" & "))?;
        }
        writeln!(out, "\\end{{tabular}}")?;
        writeln!(out, "\\end{{center}}")
    }

    fn epilogue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\\end{{document}}")
    }
}
