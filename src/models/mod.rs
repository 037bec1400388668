pub mod board;
pub mod report;

pub use board::{Board, Position};
pub use report::{LookupResult, SolveReport};
