use std::io::{self, Write};
use wordsearch_core::{Grid, Word};

use super::{Sections, WORDS_PER_LINE};

/// Horizontal spacing between word-list columns, in points
const WORD_COLUMN_WIDTH: u32 = 175;

/// PostScript page output, one cell per `show`
#[derive(Debug, Clone, Copy)]
pub struct PostScript {
    font_size: u32,
}

impl PostScript {
    pub fn new(font_size: u32) -> Self {
        Self { font_size }
    }

    /// Word list font: two points smaller unless already small
    fn list_font_size(&self) -> u32 {
        if self.font_size >= 12 {
            self.font_size - 2
        } else {
            self.font_size
        }
    }
}

/// Escape text for a PostScript string literal
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Sections for PostScript {
    fn prologue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "%!PS-Adobe-2.0")?;
        writeln!(out, "%%Creator: wordsearch {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "%%EndComments")?;
        writeln!(out, "/max")?;
        writeln!(out, "% n1 n2...max...n")?;
        writeln!(out, "{{  2 copy")?;
        writeln!(out, "   lt {{ exch }} if")?;
        writeln!(out, "   pop")?;
        writeln!(out, "}}  def")?;
        writeln!(out)?;
        writeln!(
            out,
            "/Helvetica-Bold findfont {} scalefont setfont",
            self.font_size
        )?;
        writeln!(out)?;
        writeln!(out, "/size (W)  stringwidth pop")?;
        writeln!(out, "      (\\() stringwidth exch pop")?;
        writeln!(out, "      max 4 add def")?;
        writeln!(out)?;
        writeln!(out, "/xstart  72 def")?;
        writeln!(out, "/ystart 720 def")?;
        writeln!(out, "/xpos xstart def")?;
        writeln!(out, "/ypos ystart def")?;
        writeln!(out, "%%EndProlog")?;
        writeln!(out)?;
        writeln!(out, "%%Page: 1 1")
    }

    fn grid(&self, out: &mut dyn Write, grid: &Grid, solution: bool) -> io::Result<()> {
        if solution {
            writeln!(out, "xpos ypos moveto (Solution:) show")?;
            writeln!(out, "/ypos ypos size 2 mul sub def")?;
        }

        for row in grid.rows() {
            for c in row.chars() {
                writeln!(
                    out,
                    "xpos ypos moveto ({}) show /xpos xpos size add def",
                    escape(&c.to_string())
                )?;
            }
            writeln!(out, "/ypos ypos size sub def")?;
            writeln!(out, "/xpos xstart def")?;
        }

        if solution {
            // Finish the solution page and start the puzzle page
            writeln!(out, "showpage")?;
            writeln!(out)?;
            writeln!(out, "%%Page: 2 2")?;
            writeln!(out, "/xpos xstart def")?;
            writeln!(out, "/ypos ystart def")
        } else {
            writeln!(out, "/ypos ypos size sub def")?;
            writeln!(
                out,
                "/Helvetica-Bold findfont {} scalefont setfont",
                self.list_font_size()
            )?;
            writeln!(out)
        }
    }

    fn word_list(&self, out: &mut dyn Write, words: &[&Word]) -> io::Result<()> {
        for line in words.chunks(WORDS_PER_LINE) {
            writeln!(out, "/xpos xstart def")?;
            for word in line {
                writeln!(out, "xpos ypos moveto ({}) show", escape(word.as_str()))?;
                writeln!(out, "/xpos xpos {WORD_COLUMN_WIDTH} add def")?;
            }
            writeln!(out, "/ypos ypos size sub def")?;
        }
        Ok(())
    }

    fn epilogue(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "showpage")
    }
}
