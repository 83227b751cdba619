//! Basic example of using the word-search engine

use wordsearch_core::{PuzzleBuilder, PuzzleConfig, Word, WordOrder};

fn main() {
    let words: Vec<Word> = ["ferris", "cargo", "crate", "borrow", "trait", "macro"]
        .iter()
        .filter_map(|w| Word::new(w).ok())
        .collect();

    let config = PuzzleConfig {
        grid_size: 12,
        order: WordOrder::LongestFirst,
        ..PuzzleConfig::default()
    };

    println!("Building a {0}x{0} puzzle...\n", config.grid_size);
    let mut builder = PuzzleBuilder::with_config(config);
    let puzzle = match builder.build(&words) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            println!("Unable to build puzzle: {}", e);
            return;
        }
    };

    println!("Puzzle:");
    println!("{}", puzzle.grid);

    println!("Solution:");
    println!("{}", puzzle.solution);

    println!("Words:");
    for placement in &puzzle.placements {
        println!(
            "  {:<8} {} from {}",
            placement.word, placement.direction, placement.start
        );
    }

    // A fixed seed always gives the same grid
    let again = PuzzleBuilder::with_seed(42).build(&words);
    let repeat = PuzzleBuilder::with_seed(42).build(&words);
    if let (Ok(a), Ok(b)) = (again, repeat) {
        println!("\nSeeded builds identical: {}", a == b);
    }
}
