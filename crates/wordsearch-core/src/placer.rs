use crate::error::{PuzzleError, Result};
use crate::grid::{Grid, Position};
use crate::random::RandomSource;
use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a word is laid in. Words never run left or upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Down and to the right
    DiagonalDownRight,
}

impl Direction {
    /// Directions in the order a random draw indexes them
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
    ];

    /// `(row_step, col_step)` between consecutive letters
    pub fn step(&self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
            Direction::DiagonalDownRight => write!(f, "diagonal"),
        }
    }
}

/// A word committed to the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: Word,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, in letter order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (row_step, col_step) = self.direction.step();
        (0..self.word.len()).map(move |i| {
            Position::new(self.start.row + i * row_step, self.start.col + i * col_step)
        })
    }

    /// Cell holding the last letter
    pub fn end(&self) -> Position {
        let (row_step, col_step) = self.direction.step();
        let last = self.word.len().saturating_sub(1);
        Position::new(
            self.start.row + last * row_step,
            self.start.col + last * col_step,
        )
    }

    fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.positions().zip(self.word.letters())
    }
}

/// Places single words at random with a bounded number of tries
#[derive(Debug, Clone, Copy)]
pub struct GridPlacer {
    max_attempts: usize,
}

impl Default for GridPlacer {
    fn default() -> Self {
        Self { max_attempts: 100 }
    }
}

impl GridPlacer {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Try to lay `word` into `grid`.
    ///
    /// Each attempt draws a direction, then a start that keeps the word
    /// inside the grid, then scans every cell: a blank or an identical
    /// letter is compatible, anything else rejects the attempt. The grid
    /// is only written once a full scan succeeds.
    pub fn place<R: RandomSource>(
        &self,
        grid: &mut Grid,
        word: &Word,
        rng: &mut R,
    ) -> Result<Placement> {
        let size = grid.size();
        if word.len() >= size {
            return Err(PuzzleError::WordTooLongForGrid {
                word: word.to_string(),
                len: word.len(),
                grid_size: size,
            });
        }

        for attempt in 0..self.max_attempts {
            let direction = Direction::ALL[rng.next(Direction::ALL.len())];
            let Some(start) = random_start(size, word.len(), direction, rng) else {
                continue;
            };

            let placement = Placement {
                word: word.clone(),
                start,
                direction,
            };
            if fits(grid, &placement) {
                for (pos, letter) in placement.cells() {
                    grid.set(pos, letter);
                }
                log::debug!(
                    "placed {} {} at {} after {} attempt(s)",
                    word,
                    direction,
                    start,
                    attempt + 1
                );
                return Ok(placement);
            }
            log::trace!("{word}: {direction} at {start} collides");
        }

        log::debug!("{word}: gave up after {} attempts", self.max_attempts);
        Err(PuzzleError::NoFitFound {
            word: word.to_string(),
            attempts: self.max_attempts,
        })
    }
}

/// Draw a start cell whose whole trajectory stays in bounds.
///
/// The column is drawn before the row. The start range along a stepped
/// axis is `[0, size - len)`; `None` when that range is empty.
fn random_start<R: RandomSource>(
    size: usize,
    len: usize,
    direction: Direction,
    rng: &mut R,
) -> Option<Position> {
    let span = size.checked_sub(len).filter(|&s| s > 0)?;
    let (col, row) = match direction {
        Direction::Horizontal => {
            let col = rng.next(span);
            (col, rng.next(size))
        }
        Direction::Vertical => {
            let col = rng.next(size);
            (col, rng.next(span))
        }
        Direction::DiagonalDownRight => {
            let col = rng.next(span);
            (col, rng.next(span))
        }
    };
    Some(Position::new(row, col))
}

fn fits(grid: &Grid, placement: &Placement) -> bool {
    placement
        .cells()
        .all(|(pos, letter)| grid.contains(pos) && grid.get(pos).map_or(true, |c| c == letter))
}
