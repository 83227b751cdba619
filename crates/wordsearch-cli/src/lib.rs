//! Command-line front end for the word-search engine: argument parsing,
//! logging, file handling and the output formats.

pub mod cli;
pub mod logging;
pub mod render;

pub use cli::Cli;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use wordsearch_core::{read_words, PuzzleBuilder, PuzzleError};

/// Open the configured input and output and generate one puzzle
pub fn run(cli: &Cli) -> Result<()> {
    let input: Box<dyn BufRead> = match &cli.infile {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Unable to open input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut output: Box<dyn Write> = match &cli.outfile {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to open output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    generate(cli, input, &mut output)?;
    output.flush().context("Unable to write output")?;
    Ok(())
}

/// Read words from `input`, build the puzzle and render it to `output`
pub fn generate<R: BufRead>(cli: &Cli, input: R, output: &mut dyn Write) -> Result<()> {
    let words = read_words(input, &cli.word_list_config()).context("Unable to read word list")?;
    log::debug!("read {} word(s)", words.len());

    let config = cli.puzzle_config();
    let mut builder = match cli.seed {
        Some(seed) => PuzzleBuilder::with_config_and_seed(config, seed),
        None => PuzzleBuilder::with_config(config),
    };
    let puzzle = builder.build(&words).context("Unable to build puzzle")?;

    let renderer = cli.output_format().renderer(cli.effective_font_size());
    renderer
        .render(&puzzle, &cli.render_options(), output)
        .context("Unable to write output")?;
    Ok(())
}

/// One-line message for stderr, tagged with the error code when the
/// root cause is a [`PuzzleError`]
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PuzzleError>() {
        Some(cause) => format!("Error [{}]: {err:#}", cause.code()),
        None => format!("Error: {err:#}"),
    }
}
