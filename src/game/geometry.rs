use std::collections::HashSet;

use crate::models::{Board, Position};

/// (row, col) deltas to the eight surrounding tiles, in visiting order
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (0, -1),
    (-1, 1),
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
];

/// Check if (row, col) lies on a rows x cols board
pub fn is_valid(row: isize, col: isize, rows: usize, cols: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}

/// Linear indices of the tiles around `index`, in [`NEIGHBOR_OFFSETS`] order
pub fn neighbors(index: usize, rows: usize, cols: usize) -> impl Iterator<Item = usize> {
    let row = (index / cols) as isize;
    let col = (index % cols) as isize;

    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let (nrow, ncol) = (row + dr, col + dc);
        is_valid(nrow, ncol, rows, cols).then(|| nrow as usize * cols + ncol as usize)
    })
}

/// Check if two positions are adjacent (including diagonals)
pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
    let row_diff = pos1.row.abs_diff(pos2.row);
    let col_diff = pos1.col.abs_diff(pos2.col);

    row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
}

/// Validate that tile indices form a valid path on the board
pub fn is_valid_path(board: &Board, path: &[usize]) -> bool {
    if path.is_empty() {
        return false;
    }

    if path.iter().any(|&index| index >= board.tile_count()) {
        return false;
    }

    // Check that each tile is adjacent to the previous one
    for window in path.windows(2) {
        if !are_adjacent(&board.position(window[0]), &board.position(window[1])) {
            return false;
        }
    }

    // Check that no tile is used twice
    let unique: HashSet<_> = path.iter().collect();
    unique.len() == path.len()
}

/// Concatenate the tile text along a path
pub fn extract_word(board: &Board, path: &[usize]) -> String {
    path.iter().map(|&index| board.tile(index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Board {
        Board::new(
            3,
            3,
            &[
                vec!["a", "b", "c"],
                vec!["d", "e", "f"],
                vec!["g", "h", "qu"],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position { row: 0, col: 0 };
        let pos2 = Position { row: 0, col: 1 };
        let pos3 = Position { row: 1, col: 1 };
        let pos4 = Position { row: 2, col: 2 };

        assert!(are_adjacent(&pos1, &pos2));
        assert!(are_adjacent(&pos2, &pos3));
        assert!(!are_adjacent(&pos1, &pos4));
        assert!(!are_adjacent(&pos1, &pos1));
    }

    #[test]
    fn test_neighbor_order() {
        // centre tile sees all eight, in offset order
        let around_centre: Vec<usize> = neighbors(4, 3, 3).collect();
        assert_eq!(around_centre, vec![0, 1, 3, 2, 7, 5, 8, 6]);
    }

    #[test]
    fn test_corner_and_edge_neighbors() {
        let corner: Vec<usize> = neighbors(0, 3, 3).collect();
        assert_eq!(corner, vec![3, 1, 4]);

        let edge: Vec<usize> = neighbors(5, 3, 3).collect();
        assert_eq!(edge, vec![1, 2, 4, 8, 7]);

        assert_eq!(neighbors(0, 1, 1).count(), 0);
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(is_valid(0, 0, 2, 3));
        assert!(is_valid(1, 2, 2, 3));
        assert!(!is_valid(-1, 0, 2, 3));
        assert!(!is_valid(0, 3, 2, 3));
        assert!(!is_valid(2, 0, 2, 3));
    }

    #[test]
    fn test_valid_path() {
        let board = board_3x3();
        assert!(is_valid_path(&board, &[0, 4, 8]));
        assert!(is_valid_path(&board, &[6]));
        assert!(!is_valid_path(&board, &[]));
        // not adjacent
        assert!(!is_valid_path(&board, &[0, 2]));
        // repeated tile
        assert!(!is_valid_path(&board, &[0, 1, 0]));
        // off the board
        assert!(!is_valid_path(&board, &[8, 9]));
    }

    #[test]
    fn test_extract_word() {
        let board = board_3x3();
        assert_eq!(extract_word(&board, &[0, 4, 8]), "aequ");
        assert_eq!(extract_word(&board, &[]), "");
    }
}
