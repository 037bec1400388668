use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Everything the solver found for one board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub rows: usize,
    pub cols: usize,
    pub board: Vec<Vec<String>>,
    pub min_word_length: usize,
    pub words: Vec<String>,
    pub lookups: Vec<LookupResult>,
}

/// Outcome of tracing one requested word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
    pub path: Vec<usize>,
    pub positions: Vec<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_serializes_positions() {
        let lookup = LookupResult {
            word: "at".to_string(),
            found: true,
            path: vec![1, 2],
            positions: vec![Position { row: 0, col: 1 }, Position { row: 0, col: 2 }],
        };

        assert_eq!(
            serde_json::to_value(&lookup).unwrap(),
            json!({
                "word": "at",
                "found": true,
                "path": [1, 2],
                "positions": [{ "row": 0, "col": 1 }, { "row": 0, "col": 2 }]
            })
        );
    }
}
