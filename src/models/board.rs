use serde::{Deserialize, Serialize};

use crate::errors::BoardError;
use crate::lexicon::normalize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Rectangular grid of lower-cased tile strings, stored row-major.
///
/// A tile is addressed either by [`Position`] or by its linear index
/// `row * cols + col`. Deserializing goes through [`Board::new`], so every
/// `Board` holds `rows * cols` non-empty tiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<String>,
}

/// Unchecked wire form of a [`Board`]
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    tiles: Vec<String>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = checked_tile_count(raw.rows, raw.cols)?;
        if raw.tiles.len() != expected {
            return Err(BoardError::TileCountMismatch {
                expected,
                found: raw.tiles.len(),
            });
        }

        let rows: Vec<&[String]> = raw.tiles.chunks(raw.cols).collect();
        Board::new::<&[String], String>(raw.rows, raw.cols, &rows)
    }
}

fn checked_tile_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
    match rows.checked_mul(cols) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(BoardError::InvalidDimensions { rows, cols }),
    }
}

impl Board {
    /// Build a board from `rows` rows of `cols` tiles each.
    ///
    /// Tile text is lower-cased. Zero dimensions, a wrong number of rows,
    /// ragged rows and empty tiles are rejected.
    pub fn new<R, S>(rows: usize, cols: usize, tiles: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        checked_tile_count(rows, cols)?;
        if tiles.len() != rows {
            return Err(BoardError::RowCountMismatch {
                expected: rows,
                found: tiles.len(),
            });
        }

        // validate the shape before allocating anything sized by it
        for (row, line) in tiles.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }

            if let Some(col) = line.iter().position(|tile| tile.as_ref().is_empty()) {
                return Err(BoardError::EmptyTile { row, col });
            }
        }

        let tiles = tiles
            .iter()
            .flat_map(|line| line.as_ref().iter())
            .map(|tile| normalize(tile.as_ref()))
            .collect();

        Ok(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tile text at a linear index
    pub fn tile(&self, index: usize) -> &str {
        &self.tiles[index]
    }

    pub fn position(&self, index: usize) -> Position {
        Position {
            row: index / self.cols,
            col: index % self.cols,
        }
    }

    /// Tiles as a row-major 2D grid
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.tiles.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}
