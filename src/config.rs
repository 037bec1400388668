use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub board: BoardConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Board file to solve; a random board is generated when unset
    pub path: Option<String>,
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub min_word_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let dictionary = DictionaryConfig {
            path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
        };

        let board = BoardConfig {
            path: env::var("BOARD_PATH").ok().filter(|p| !p.is_empty()),
            rows: env::var("BOARD_ROWS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("BOARD_ROWS must be a number")?,
            cols: env::var("BOARD_COLS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("BOARD_COLS must be a number")?,
        };

        let search = SearchConfig {
            min_word_length: env::var("MIN_WORD_LENGTH")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("MIN_WORD_LENGTH must be a number")?,
        };

        Ok(Config {
            dictionary,
            board,
            search,
        })
    }
}
