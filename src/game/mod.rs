// Board search engine and the board helpers it relies on

pub mod geometry;
pub mod grid;
pub mod player;

pub use grid::{custom_board, GridGenerator};
pub use player::BogglePlayer;
