use rand::Rng;

use crate::{
    models::Board,
    utils::letters::{get_cumulative_distribution, tile_face},
};

/// Side length of the fixed custom board
pub const CUSTOM_BOARD_SIZE: usize = 4;

/// Face printed on every tile of the custom board
pub const CUSTOM_BOARD_FACE: &str = "a";

/// Build the 4x4 board where every tile reads "a".
///
/// Returns the tiles along with their row and column counts.
pub fn custom_board() -> (Vec<Vec<String>>, usize, usize) {
    let tiles = vec![vec![CUSTOM_BOARD_FACE.to_string(); CUSTOM_BOARD_SIZE]; CUSTOM_BOARD_SIZE];
    (tiles, CUSTOM_BOARD_SIZE, CUSTOM_BOARD_SIZE)
}

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a rows x cols board with weighted letter distribution
    pub fn generate(rows: usize, cols: usize) -> Vec<Vec<String>> {
        Self::generate_with(rows, cols, &mut rand::rng())
    }

    /// Same as [`GridGenerator::generate`] with a caller-supplied RNG
    pub fn generate_with(rows: usize, cols: usize, rng: &mut impl Rng) -> Vec<Vec<String>> {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, c)| *c);

        (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| tile_face(Self::random_letter(&cumulative_dist, total, &mut *rng)))
                    .collect()
            })
            .collect()
    }

    /// Generate and validate a board in one step
    pub fn generate_board(rows: usize, cols: usize) -> Result<Board, crate::errors::BoardError> {
        Board::new(rows, cols, &Self::generate(rows, cols))
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'e' // Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_custom_board() {
        let (tiles, rows, cols) = custom_board();
        assert_eq!((rows, cols), (4, 4));
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().flatten().all(|tile| tile == "a"));
    }

    #[test]
    fn test_grid_generation() {
        let grid = GridGenerator::generate(5, 3);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 3));
        assert!(grid
            .iter()
            .flatten()
            .all(|tile| tile == "qu" || (tile.len() == 1 && tile.chars().all(|c| c.is_ascii_lowercase()))));
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let first = GridGenerator::generate_with(4, 4, &mut StdRng::seed_from_u64(7));
        let second = GridGenerator::generate_with(4, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_board() {
        let board = GridGenerator::generate_board(4, 4).unwrap();
        assert_eq!(board.tile_count(), 16);
        assert!(GridGenerator::generate_board(0, 4).is_err());
    }
}
