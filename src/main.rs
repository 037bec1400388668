use std::env;

use anyhow::{Context, Result};
use boggle_solver::{
    config::Config,
    dictionary::Dictionary,
    game::{BogglePlayer, GridGenerator},
    loader::load_board,
    models::{LookupResult, SolveReport},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_solver=info,boggle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded: {:?}", config);

    // Load dictionary
    let dictionary = match Dictionary::load(&config.dictionary.path).await {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!("Failed to load dictionary: {:#}. Using empty dictionary.", e);
            tracing::warn!(
                "Put a word list at {} or set DICTIONARY_PATH to find words",
                config.dictionary.path
            );
            Dictionary::empty()
        }
    };

    let board = match &config.board.path {
        Some(path) => load_board(path).await?,
        None => {
            let board = GridGenerator::generate_board(config.board.rows, config.board.cols)
                .context("BOARD_ROWS and BOARD_COLS must be positive")?;
            tracing::info!("Generated random {}x{} board", board.rows(), board.cols());
            board
        }
    };

    let mut player = BogglePlayer::new();
    player.build_lexicon(dictionary.words());
    player.replace_board(board.clone());

    let min_word_length = config.search.min_word_length;
    let words = player.get_all_valid_words(min_word_length)?;

    let lookups = env::args()
        .skip(1)
        .map(|word| {
            let path = player.is_on_board(&word);
            LookupResult {
                found: !path.is_empty(),
                positions: player.path_positions(&path),
                word,
                path,
            }
        })
        .collect();

    let report = SolveReport {
        rows: board.rows(),
        cols: board.cols(),
        board: board.to_rows(),
        min_word_length,
        words: words.into_iter().collect(),
        lookups,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
