//! Boggle board solver.
//!
//! A [`Lexicon`] prefix tree answers word / prefix / absent queries, and a
//! [`BogglePlayer`] uses it to prune an exhaustive backtracking search over
//! the tiles of a [`Board`].
//!
//! ```
//! use boggle_solver::BogglePlayer;
//!
//! let mut player = BogglePlayer::new();
//! player.set_board(1, 3, &[vec!["C", "A", "T"]]).unwrap();
//! player.build_lexicon(["cat", "at"]);
//!
//! let words = player.get_all_valid_words(2).unwrap();
//! assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["at", "cat"]);
//! assert_eq!(player.is_on_board("CAT"), vec![0, 1, 2]);
//! ```

pub mod config;
pub mod dictionary;
pub mod errors;
pub mod game;
pub mod lexicon;
pub mod loader;
pub mod models;
pub mod utils;

pub use errors::{BoardError, SolverError};
pub use game::BogglePlayer;
pub use lexicon::{Lexicon, LexiconQuery};
pub use models::{Board, Position};
