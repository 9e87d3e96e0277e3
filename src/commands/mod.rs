//! Command implementations

pub mod benchmark;
pub mod neighbours;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbours::{NeighbourReport, PatternBucket, find_neighbours};
pub use play::{LadderGame, MoveError, MoveOutcome, run_play};
pub use solve::{SolveConfig, SolveResult, solve_ladder};

use crate::core::{Word, WordError};
use thiserror::Error;

/// Errors surfaced by command implementations
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("'{start}' has {start_len} letters but '{end}' has {end_len}")]
    LengthMismatch {
        start: String,
        end: String,
        start_len: usize,
        end_len: usize,
    },

    #[error("Word '{0}' not in word list")]
    NotInDictionary(String),

    #[error("No {0}-letter words in word list")]
    EmptyDictionary(usize),

    #[error("No ladder connects '{start}' to '{end}'")]
    NoLadder { start: String, end: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate user input as a dictionary word
pub(crate) fn parse_word(text: &str) -> Result<Word, CommandError> {
    Word::new(text).map_err(|source| CommandError::InvalidWord {
        word: text.to_string(),
        source,
    })
}

/// Validate a start/end pair and check both have the same length
pub(crate) fn parse_endpoints(start: &str, end: &str) -> Result<(Word, Word), CommandError> {
    let start_word = parse_word(start)?;
    let end_word = parse_word(end)?;

    if start_word.len() != end_word.len() {
        return Err(CommandError::LengthMismatch {
            start: start_word.text().to_string(),
            end: end_word.text().to_string(),
            start_len: start_word.len(),
            end_len: end_word.len(),
        });
    }

    Ok((start_word, end_word))
}
