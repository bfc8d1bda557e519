use super::MAX_NEIGHBORS;
use crate::errors::{Result, WordSearchError};

/// Uppercases a word or tile so lexicon and board comparisons are case-insensitive
pub fn normalize(word: &str) -> String {
    word.to_uppercase()
}

/// Number of characters a normalized word counts for when applying length rules
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Minimum word lengths below 1 make every path scorable and are rejected
pub fn check_min_length(min_length: usize) -> Result<()> {
    if min_length < 1 {
        return Err(WordSearchError::invalid("minimum word length must be at least 1"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major index back into a row/col pair
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }

    /// Converts the row/col to a 1d row-major index
    pub fn as_index(&self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Checks whether the position lies inside a `size` x `size` grid
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Checks whether two positions touch, diagonals included. A position is not adjacent to itself.
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Returns all the positions adjacent to this one inside a `size` x `size` grid.
    /// Order is fixed: row offset -1, 0, 1, and within each row column offset -1, 0, 1.
    pub fn adjacent(&self, size: usize) -> Vec<Position> {
        let mut result = Vec::with_capacity(MAX_NEIGHBORS);
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = self.row.checked_add_signed(dr);
                let col = self.col.checked_add_signed(dc);
                if let (Some(row), Some(col)) = (row, col) {
                    let pos = Position { row, col };
                    if pos.in_bounds(size) {
                        result.push(pos);
                    }
                }
            }
        }
        result
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
