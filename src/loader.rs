//! Board text format.
//!
//! The first non-blank line holds `ROWS COLS`; each of the next `ROWS`
//! non-blank lines holds `COLS` whitespace-separated tiles:
//!
//! ```text
//! 2 3
//! c a t
//! Qu e s
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::{errors::BoardError, models::Board};

/// Read and parse a board file
pub async fn load_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read board {}", path.display()))?;
    let board = parse_board(&content)
        .with_context(|| format!("Invalid board in {}", path.display()))?;

    tracing::info!("Loaded {}x{} board from {}", board.rows(), board.cols(), path.display());

    Ok(board)
}

/// Parse a board from its text form
pub fn parse_board(content: &str) -> Result<Board, BoardError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| BoardError::Parse {
        line: 1,
        message: "missing dimensions".to_string(),
    })?;

    let dims: Vec<&str> = header.split_whitespace().collect();
    let [rows, cols] = dims.as_slice() else {
        return Err(BoardError::Parse {
            line: header_line,
            message: format!("expected 'ROWS COLS', found '{}'", header),
        });
    };
    let rows = parse_dimension(rows, header_line)?;
    let cols = parse_dimension(cols, header_line)?;

    let tiles: Vec<Vec<&str>> = lines
        .take(rows)
        .map(|(_, line)| line.split_whitespace().collect())
        .collect();

    Board::new(rows, cols, &tiles)
}

fn parse_dimension(text: &str, line: usize) -> Result<usize, BoardError> {
    text.parse().map_err(|_| BoardError::Parse {
        line,
        message: format!("'{}' is not a valid dimension", text),
    })
}
