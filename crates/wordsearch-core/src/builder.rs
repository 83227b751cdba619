use crate::error::{PuzzleError, Result};
use crate::grid::{self, Grid};
use crate::placer::{GridPlacer, Placement};
use crate::random::{PcgRandom, RandomSource};
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Size of the filler alphabet (A-Z)
const ALPHABET_LEN: usize = 26;

/// Order in which words are handed to the placer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WordOrder {
    /// Place words exactly as given
    #[default]
    Input,
    /// Longest words first; ties keep their input order
    LongestFirst,
}

impl WordOrder {
    /// Indices into `words` in placement order
    pub fn arrange(&self, words: &[Word]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..words.len()).collect();
        match self {
            WordOrder::Input => {}
            WordOrder::LongestFirst => {
                order.sort_by(|&a, &b| words[b].len().cmp(&words[a].len()));
            }
        }
        order
    }
}

/// Configuration for puzzle construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Width and height of the grid
    pub grid_size: usize,
    /// Random placement tries per word before giving up
    pub max_attempts: usize,
    /// Placement order strategy
    pub order: WordOrder,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            max_attempts: 100,
            order: WordOrder::Input,
        }
    }
}

impl PuzzleConfig {
    pub fn validate(&self) -> Result<()> {
        grid::check_size(self.grid_size)?;
        if self.max_attempts == 0 {
            return Err(PuzzleError::InvalidConfiguration(
                "max attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A finished puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    /// Every cell filled
    pub grid: Grid,
    /// Only the placed letters; blanks elsewhere
    pub solution: Grid,
    /// One entry per input word, in input order
    pub placements: Vec<Placement>,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The word list, in input order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.placements.iter().map(|p| &p.word)
    }
}

/// Word-search puzzle builder
pub struct PuzzleBuilder<R: RandomSource = PcgRandom> {
    config: PuzzleConfig,
    rng: R,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::with_config(PuzzleConfig::default())
    }

    /// Create a builder with custom configuration
    pub fn with_config(config: PuzzleConfig) -> Self {
        Self {
            config,
            rng: PcgRandom::new(),
        }
    }

    /// Create a builder with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config_and_seed(PuzzleConfig::default(), seed)
    }

    pub fn with_config_and_seed(config: PuzzleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: PcgRandom::with_seed(seed),
        }
    }
}

impl<R: RandomSource> PuzzleBuilder<R> {
    /// Create a builder drawing from any random source
    pub fn with_rng(config: PuzzleConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Place every word, then fill the remaining cells.
    ///
    /// Stops at the first word that cannot be placed; no grid is returned
    /// in that case.
    pub fn build(&mut self, words: &[Word]) -> Result<Puzzle> {
        self.config.validate()?;
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        let mut grid = Grid::new(self.config.grid_size)?;
        let placer = GridPlacer::new(self.config.max_attempts);
        let mut placed: Vec<Option<Placement>> = vec![None; words.len()];

        for idx in self.config.order.arrange(words) {
            let placement = placer
                .place(&mut grid, &words[idx], &mut self.rng)
                .map_err(|err| {
                    log::debug!("build failed: {err}");
                    err
                })?;
            placed[idx] = Some(placement);
        }

        let solution = grid.clone();
        self.fill_blanks(&mut grid);

        log::info!(
            "placed {} word(s) in a {}x{} grid",
            words.len(),
            self.config.grid_size,
            self.config.grid_size
        );

        Ok(Puzzle {
            grid,
            solution,
            placements: placed.into_iter().flatten().collect(),
        })
    }

    /// Replace every blank with a random letter, row by row
    fn fill_blanks(&mut self, grid: &mut Grid) {
        let blanks: Vec<_> = grid.positions().filter(|&p| grid.is_blank(p)).collect();
        log::debug!("filling {} blank cell(s)", blanks.len());
        for pos in blanks {
            let letter = (b'A' + self.rng.next(ALPHABET_LEN) as u8) as char;
            grid.set(pos, letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn read_back(grid: &Grid, placement: &Placement) -> String {
        placement
            .positions()
            .map(|p| grid.get(p).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_cat_dog_small_grid() {
        let config = PuzzleConfig {
            grid_size: 4,
            ..PuzzleConfig::default()
        };
        let mut builder = PuzzleBuilder::with_config_and_seed(config, 42);
        let puzzle = builder.build(&words(&["CAT", "DOG"])).unwrap();

        assert_eq!(puzzle.size(), 4);
        assert!(puzzle.grid.is_complete());
        assert_eq!(puzzle.placements.len(), 2);
        assert_eq!(puzzle.placements[0].word.as_str(), "CAT");
        assert_eq!(puzzle.placements[1].word.as_str(), "DOG");
        for placement in &puzzle.placements {
            assert_eq!(read_back(&puzzle.grid, placement), placement.word.as_str());
        }
        assert_eq!(puzzle.solution.blank_count(), 16 - 6);
    }

    #[test]
    fn test_filled_cells_are_uppercase_letters() {
        let mut builder = PuzzleBuilder::with_seed(3);
        let puzzle = builder
            .build(&words(&["RUST", "CARGO", "CRATE", "TRAIT", "BORROW"]))
            .unwrap();
        for pos in puzzle.grid.positions() {
            let c = puzzle.grid.get(pos).unwrap();
            assert!(c.is_ascii_uppercase(), "{c:?} at {pos}");
        }
    }

    #[test]
    fn test_solution_only_holds_placed_letters() {
        let mut builder = PuzzleBuilder::with_seed(17);
        let puzzle = builder.build(&words(&["ALPHA", "BETA", "GAMMA"])).unwrap();

        for pos in puzzle.solution.positions() {
            let covered = puzzle
                .placements
                .iter()
                .any(|p| p.positions().any(|q| q == pos));
            assert_eq!(puzzle.solution.get(pos).is_some(), covered);
            if covered {
                assert_eq!(puzzle.solution.get(pos), puzzle.grid.get(pos));
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let list = words(&["ORANGE", "LEMON", "LIME", "MANGO", "PAPAYA"]);
        let a = PuzzleBuilder::with_seed(2024).build(&list).unwrap();
        let b = PuzzleBuilder::with_seed(2024).build(&list).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.grid.to_string(), b.grid.to_string());
    }

    #[test]
    fn test_word_longer_than_grid_fails() {
        let config = PuzzleConfig {
            grid_size: 5,
            max_attempts: 100,
            ..PuzzleConfig::default()
        };
        let mut builder = PuzzleBuilder::with_config_and_seed(config, 9);
        let err = builder.build(&words(&["SUPERCALIFRAGILISTIC"])).unwrap_err();
        assert!(err.is_placement_failure());
        assert_eq!(err.failed_word(), Some("SUPERCALIFRAGILISTIC"));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let config = PuzzleConfig {
            grid_size: 6,
            ..PuzzleConfig::default()
        };
        let mut builder = PuzzleBuilder::with_config_and_seed(config, 1);
        let err = builder
            .build(&words(&["TOOLONGWORD", "ANOTHERLONGONE"]))
            .unwrap_err();
        assert_eq!(err.failed_word(), Some("TOOLONGWORD"));
    }

    #[test]
    fn test_invalid_configuration() {
        let list = words(&["CAT"]);
        for config in [
            PuzzleConfig {
                grid_size: 0,
                ..PuzzleConfig::default()
            },
            PuzzleConfig {
                max_attempts: 0,
                ..PuzzleConfig::default()
            },
            PuzzleConfig {
                grid_size: 1 << 32,
                ..PuzzleConfig::default()
            },
        ] {
            let err = PuzzleBuilder::with_config_and_seed(config, 1)
                .build(&list)
                .unwrap_err();
            assert!(matches!(err, PuzzleError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_empty_word_list() {
        let err = PuzzleBuilder::with_seed(1).build(&[]).unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyWordList));
    }

    #[test]
    fn test_longest_first_order() {
        let list = words(&["OX", "GIRAFFE", "CAT", "ZEBRA", "DOG"]);
        assert_eq!(WordOrder::Input.arrange(&list), vec![0, 1, 2, 3, 4]);
        assert_eq!(WordOrder::LongestFirst.arrange(&list), vec![1, 3, 2, 4, 0]);
    }

    #[test]
    fn test_placements_reported_in_input_order() {
        let config = PuzzleConfig {
            order: WordOrder::LongestFirst,
            ..PuzzleConfig::default()
        };
        let list = words(&["OX", "GIRAFFE", "CAT"]);
        let puzzle = PuzzleBuilder::with_config_and_seed(config, 5)
            .build(&list)
            .unwrap();
        let placed: Vec<_> = puzzle.words().map(Word::as_str).collect();
        assert_eq!(placed, vec!["OX", "GIRAFFE", "CAT"]);
    }

    #[test]
    fn test_custom_random_source() {
        struct Zeros;
        impl RandomSource for Zeros {
            fn next(&mut self, _bound: usize) -> usize {
                0
            }
        }

        let config = PuzzleConfig {
            grid_size: 4,
            ..PuzzleConfig::default()
        };
        let puzzle = PuzzleBuilder::with_rng(config, Zeros)
            .build(&words(&["CAT"]))
            .unwrap();
        assert_eq!(puzzle.placements[0].start, Position::new(0, 0));
        assert_eq!(puzzle.grid.rows(), vec!["CATA", "AAAA", "AAAA", "AAAA"]);
    }

    #[test]
    fn test_puzzle_serializes() {
        let config = PuzzleConfig {
            grid_size: 4,
            ..PuzzleConfig::default()
        };
        let puzzle = PuzzleBuilder::with_config_and_seed(config, 42)
            .build(&words(&["CAT"]))
            .unwrap();
        let value = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(value["grid"].as_array().unwrap().len(), 4);
        assert_eq!(value["placements"][0]["word"], "CAT");
    }
}
