use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array2;
use serde::Deserialize;

use super::util::{normalize, Position};
use super::DEFAULT_BOARD;
use crate::errors::{Result, WordSearchError};

/// Board files may list the tiles flat in row-major order or as nested rows
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBoard {
    Flat(Vec<String>),
    Rows(Vec<Vec<String>>),
}

/// Immutable square grid of tiles. Tiles are strings, so a single cell can hold "QU".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Array2<String>,
}

impl Board {
    /// Builds a board from N*N tiles in row-major order. Tiles are uppercased.
    pub fn new<S: AsRef<str>>(tiles: &[S]) -> Result<Self> {
        if tiles.is_empty() {
            return Err(WordSearchError::invalid("board must contain at least one tile"));
        }
        let size = (tiles.len() as f64).sqrt().round() as usize;
        if size * size != tiles.len() {
            return Err(WordSearchError::invalid(format!(
                "board of {} tiles is not square",
                tiles.len()
            )));
        }

        let cells = tiles.iter().map(|t| normalize(t.as_ref())).collect();
        let tiles = Array2::from_shape_vec((size, size), cells)
            .map_err(|e| WordSearchError::invalid(e.to_string()))?;
        Ok(Self { tiles })
    }

    /// Decodes a board from JSON, either `["A", "B", ...]` or `[["A", "B"], ...]`
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: RawBoard = serde_json::from_str(data)?;
        match raw {
            RawBoard::Flat(tiles) => Self::new(&tiles),
            RawBoard::Rows(rows) => {
                let size = rows.len();
                if let Some(bad) = rows.iter().position(|r| r.len() != size) {
                    return Err(WordSearchError::invalid(format!(
                        "row {bad} has {} tiles, expected {size}",
                        rows[bad].len()
                    )));
                }
                let tiles: Vec<String> = rows.into_iter().flatten().collect();
                Self::new(&tiles)
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;
        Self::from_json_str(&data)
    }

    /// Number of rows (equal to the number of columns)
    pub fn size(&self) -> usize {
        self.tiles.nrows()
    }

    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    pub fn tile_at(&self, pos: Position) -> Result<&str> {
        self.tiles
            .get((pos.row, pos.col))
            .map(String::as_str)
            .ok_or(WordSearchError::OutOfRange {
                row: pos.row,
                col: pos.col,
                size: self.size(),
            })
    }

    /// Valid adjacent positions, in the fixed order given by [`Position::adjacent`]
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.adjacent(self.size())
    }

    pub fn linear_index(&self, pos: Position) -> usize {
        pos.as_index(self.width())
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position::from_index(index, self.width())
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width();
        (0..self.tiles.len()).map(move |i| Position::from_index(i, width))
    }

    /// Concatenation of the tiles along a path of linear indices
    pub fn spell(&self, path: &[usize]) -> Result<String> {
        let mut word = String::new();
        for &index in path {
            word.push_str(self.tile_at(self.position_of(index))?);
        }
        Ok(word)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tiles: Array2::from_shape_fn((4, 4), |(row, col)| DEFAULT_BOARD[row * 4 + col].to_string()),
        }
    }
}

impl std::ops::Index<Position> for Board {
    type Output = str;

    fn index(&self, index: Position) -> &Self::Output {
        &self.tiles[(index.row, index.col)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row.iter() {
                write!(f, "{tile} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
