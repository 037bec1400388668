use std::collections::BTreeSet;

use crate::{
    errors::{BoardError, SolverError},
    game::geometry::neighbors,
    lexicon::{normalize, Lexicon, LexiconQuery},
    models::{Board, Position},
};

/// Solves a Boggle board against a lexicon.
///
/// The player keeps one visited marker per tile and reuses it across
/// searches, so both search operations take `&mut self`. Every search leaves
/// the markers cleared when it returns. Use one player per thread.
#[derive(Debug, Default)]
pub struct BogglePlayer {
    board: Option<Board>,
    visited: Vec<bool>,
    lexicon: Lexicon,
    lexicon_built: bool,
}

impl BogglePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the lexicon with `words`. Any previously built lexicon is
    /// cleared first.
    pub fn build_lexicon<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lexicon.clear();
        self.lexicon.extend(words);
        self.lexicon_built = true;

        tracing::info!("Built lexicon with {} words", self.lexicon.len());
    }

    /// Replace the board with `rows` x `cols` tiles.
    ///
    /// On error the previous board, if any, stays in place.
    pub fn set_board<R, S>(
        &mut self,
        rows: usize,
        cols: usize,
        tiles: &[R],
    ) -> Result<(), BoardError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let board = Board::new(rows, cols, tiles)?;
        self.replace_board(board);
        Ok(())
    }

    /// Install an already validated board
    pub fn replace_board(&mut self, board: Board) {
        self.visited = vec![false; board.tile_count()];
        tracing::debug!("Board set to {}x{}", board.rows(), board.cols());
        self.board = Some(board);
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn is_board_set(&self) -> bool {
        self.board.is_some()
    }

    pub fn is_lexicon_built(&self) -> bool {
        self.lexicon_built
    }

    /// Check if `word` (any case) is a whole word in the lexicon
    pub fn is_in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(&normalize(word))
    }

    /// Find every lexicon word of at least `min_length` characters that can
    /// be traced on the board.
    pub fn get_all_valid_words(
        &mut self,
        min_length: usize,
    ) -> Result<BTreeSet<String>, SolverError> {
        let Some(board) = self.board.as_ref() else {
            return Err(SolverError::BoardNotSet);
        };
        if !self.lexicon_built {
            return Err(SolverError::LexiconNotBuilt);
        }

        let mut search = WordSearch {
            board,
            lexicon: &self.lexicon,
            visited: &mut self.visited,
            min_length,
            words: BTreeSet::new(),
        };
        search.run();
        let words = search.words;

        tracing::info!(
            "Found {} words of length >= {} on {}x{} board",
            words.len(),
            min_length,
            board.rows(),
            board.cols()
        );

        Ok(words)
    }

    /// Trace `word` (any case) on the board, returning the tile indices of
    /// the first path found, or an empty vector if there is none or no board
    /// has been set.
    ///
    /// Each step consumes one tile's entire text. Start tiles are tried in
    /// row-major order and neighbours in [`NEIGHBOR_OFFSETS`] order, so the
    /// result is stable for a given board.
    ///
    /// [`NEIGHBOR_OFFSETS`]: crate::game::geometry::NEIGHBOR_OFFSETS
    pub fn is_on_board(&mut self, word: &str) -> Vec<usize> {
        let Some(board) = self.board.as_ref() else {
            return Vec::new();
        };

        let target = normalize(word);
        if target.is_empty() {
            return Vec::new();
        }

        self.visited.fill(false);
        let mut path = Vec::new();

        for start in 0..board.tile_count() {
            let Some(rest) = target.strip_prefix(board.tile(start)) else {
                continue;
            };

            path.push(start);
            self.visited[start] = true;

            if rest.is_empty() || trace(board, &mut self.visited, &mut path, rest) {
                // the winning path is still marked
                self.visited.fill(false);
                break;
            }

            self.visited[start] = false;
            path.pop();
        }

        tracing::debug!("Lookup for '{}' -> {:?}", target, path);
        path
    }

    /// Convert a tile path into board positions
    pub fn path_positions(&self, path: &[usize]) -> Vec<Position> {
        match &self.board {
            Some(board) => path.iter().map(|&index| board.position(index)).collect(),
            None => Vec::new(),
        }
    }

    #[cfg(test)]
    fn all_unvisited(&self) -> bool {
        self.visited.iter().all(|&v| !v)
    }
}

/// State for one exhaustive enumeration
struct WordSearch<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    visited: &'a mut [bool],
    min_length: usize,
    words: BTreeSet<String>,
}

impl WordSearch<'_> {
    fn run(&mut self) {
        self.visited.fill(false);

        for start in 0..self.board.tile_count() {
            let mut word = self.board.tile(start).to_string();
            let result = self.lexicon.query(&word);

            // a tile can be a word and a prefix at once; both apply
            if result == LexiconQuery::Word && self.long_enough(&word) {
                self.words.insert(word.clone());
            }

            if result.is_viable() {
                self.visited[start] = true;
                self.extend(start, &mut word);
                self.visited[start] = false;
            }
        }
    }

    fn extend(&mut self, index: usize, word: &mut String) {
        let (rows, cols) = (self.board.rows(), self.board.cols());

        for next in neighbors(index, rows, cols) {
            if self.visited[next] {
                continue;
            }

            let base_len = word.len();
            word.push_str(self.board.tile(next));

            match self.lexicon.query(word.as_str()) {
                LexiconQuery::Absent => {
                    word.truncate(base_len);
                    continue;
                }
                LexiconQuery::Word if self.long_enough(word.as_str()) => {
                    self.words.insert(word.clone());
                }
                _ => {}
            }

            self.visited[next] = true;
            self.extend(next, word);
            self.visited[next] = false;

            word.truncate(base_len);
        }
    }

    fn long_enough(&self, word: &str) -> bool {
        word.chars().count() >= self.min_length
    }
}

/// Match `rest` through unvisited neighbours of the last tile on `path`.
/// On success `path` holds the full trace.
fn trace(board: &Board, visited: &mut [bool], path: &mut Vec<usize>, rest: &str) -> bool {
    let Some(&current) = path.last() else {
        return false;
    };

    for next in neighbors(current, board.rows(), board.cols()) {
        if visited[next] {
            continue;
        }

        let Some(remaining) = rest.strip_prefix(board.tile(next)) else {
            continue;
        };

        path.push(next);
        visited[next] = true;

        if remaining.is_empty() || trace(board, visited, path, remaining) {
            return true;
        }

        path.pop();
        visited[next] = false;
    }

    false
}
