use thiserror::Error;

/// Structural problems with a board handed to the solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("expected {expected} rows of tiles, found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} tiles, found {found}")]
    TileCountMismatch { expected: usize, found: usize },

    #[error("tile at ({row}, {col}) is empty")]
    EmptyTile { row: usize, col: usize },

    #[error("board parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Returned when a search is issued before setup is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("no board has been set")]
    BoardNotSet,

    #[error("lexicon has not been built")]
    LexiconNotBuilt,
}
