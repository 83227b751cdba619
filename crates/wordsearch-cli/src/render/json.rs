use serde::Serialize;
use std::io::{self, Write};
use wordsearch_core::{Grid, Placement, Puzzle};

use super::{RenderOptions, Renderer};

/// Machine-readable output: the whole puzzle as one JSON document
#[derive(Debug, Clone, Copy)]
pub struct Json;

#[derive(Serialize)]
struct Document<'a> {
    grid_size: usize,
    grid: &'a Grid,
    placements: &'a [Placement],
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<&'a Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_list: Option<Vec<&'a str>>,
}

impl Renderer for Json {
    fn render(
        &self,
        puzzle: &Puzzle,
        options: &RenderOptions,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let document = Document {
            grid_size: puzzle.size(),
            grid: &puzzle.grid,
            placements: &puzzle.placements,
            solution: options.solution.then_some(&puzzle.solution),
            word_list: options
                .word_list
                .then(|| puzzle.words().map(|w| w.as_str()).collect()),
        };
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)
    }
}
