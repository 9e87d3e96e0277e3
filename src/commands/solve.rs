//! Ladder solving command
//!
//! Finds the shortest ladder length between two words of the dictionary.

use super::{CommandError, parse_endpoints};
use crate::core::Word;
use crate::ladder::ladder_length;
use crate::wordlists::loader::words_of_length;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub end: String,
    /// Number of substitutions, `None` when no ladder exists
    pub distance: Option<usize>,
    /// Whether `end` itself is a dictionary word; a ladder can only end on one
    pub end_in_dictionary: bool,
    /// Words of the searched length
    pub dictionary_size: usize,
    pub duration: Duration,
}

/// Solve the ladder described by `config` over `dictionary`
///
/// Only dictionary words with the same length as the endpoints take part in
/// the search.
///
/// # Errors
///
/// Returns an error if:
/// - Either endpoint is not a valid word
/// - The endpoints have different lengths
/// - The dictionary has no words of that length
pub fn solve_ladder(
    config: SolveConfig,
    dictionary: &[Word],
) -> Result<SolveResult, CommandError> {
    let (start, end) = parse_endpoints(&config.start, &config.end)?;

    let candidates = words_of_length(dictionary, start.len());
    if candidates.is_empty() {
        return Err(CommandError::EmptyDictionary(start.len()));
    }

    let timer = Instant::now();
    let distance = ladder_length(start.text(), end.text(), &candidates);
    let duration = timer.elapsed();

    info!(
        start = start.text(),
        end = end.text(),
        ?distance,
        elapsed_us = duration.as_micros() as u64,
        "solved ladder"
    );

    Ok(SolveResult {
        end_in_dictionary: candidates.contains(&end),
        start: start.text().to_string(),
        end: end.text().to_string(),
        distance,
        dictionary_size: candidates.len(),
        duration,
    })
}
