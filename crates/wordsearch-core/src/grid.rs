use crate::error::{PuzzleError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A cell coordinate; `row` grows downward, `col` grows rightward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Largest accepted grid width
pub const MAX_GRID_SIZE: usize = 1024;

/// Square letter grid. `None` marks a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Letter at `pos`, or `None` if blank or outside the grid
    pub fn get(&self, pos: Position) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        let idx = self.index(pos);
        self.cells[idx] = Some(letter);
    }

    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True once every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.blank_count() == 0
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// One row as text, blanks rendered as spaces
    pub fn row(&self, row: usize) -> String {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|c| c.unwrap_or(' '))
            .collect()
    }

    pub fn rows(&self) -> Vec<String> {
        (0..self.size).map(|row| self.row(row)).collect()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

/// Reject sizes outside `1..=MAX_GRID_SIZE`
pub(crate) fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(PuzzleError::InvalidConfiguration(
            "grid size must be positive".to_string(),
        ));
    }
    if size > MAX_GRID_SIZE {
        return Err(PuzzleError::InvalidConfiguration(format!(
            "grid size {size} exceeds the maximum of {MAX_GRID_SIZE}"
        )));
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            writeln!(f, "{}", self.row(row))?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.blank_count(), 16);
        assert!(!grid.is_complete());
        assert!(grid.positions().all(|p| grid.is_blank(p)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = Grid::new(0).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        for size in [MAX_GRID_SIZE + 1, 1 << 32, usize::MAX] {
            let err = Grid::new(size).unwrap_err();
            assert!(matches!(err, PuzzleError::InvalidConfiguration(_)), "size {size}");
        }
        assert_eq!(Grid::new(MAX_GRID_SIZE).unwrap().size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(Position::new(1, 2), 'Q');
        assert_eq!(grid.get(Position::new(1, 2)), Some('Q'));
        assert_eq!(grid.get(Position::new(2, 1)), None);
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.blank_count(), 8);
    }

    #[test]
    fn test_rows_render_blanks_as_spaces() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(Position::new(0, 0), 'A');
        grid.set(Position::new(0, 2), 'C');
        assert_eq!(grid.rows(), vec!["A C", "   ", "   "]);
        assert_eq!(grid.to_string(), "A C\n   \n   \n");
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::new(2).unwrap();
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(
            all,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_serializes_as_rows() {
        let mut grid = Grid::new(2).unwrap();
        grid.set(Position::new(1, 1), 'Z');
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["  "," Z"]"#);
    }
}
