//! Neighbour inspection command
//!
//! Shows every dictionary word one substitution away from a word, grouped by
//! the wildcard pattern that links them.

use super::{CommandError, parse_word};
use crate::core::Word;
use crate::ladder::NeighbourIndex;
use crate::wordlists::loader::words_of_length;

/// Words sharing one wildcard pattern with the inspected word
pub struct PatternBucket {
    pub pattern: String,
    pub words: Vec<String>,
}

/// Result of inspecting a word's neighbourhood
pub struct NeighbourReport {
    pub word: String,
    /// One bucket per letter position, left to right
    pub buckets: Vec<PatternBucket>,
    pub total_neighbours: usize,
    /// Words of the inspected length
    pub dictionary_size: usize,
}

/// List the neighbours of `word` within `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The word is not in the provided word list
pub fn find_neighbours(
    word: &str,
    dictionary: &[Word],
) -> Result<NeighbourReport, CommandError> {
    let word = parse_word(word)?;

    let candidates = words_of_length(dictionary, word.len());
    if !candidates.contains(&word) {
        return Err(CommandError::NotInDictionary(word.text().to_string()));
    }

    let index = NeighbourIndex::build(&candidates);

    let buckets = word
        .patterns()
        .map(|pattern| PatternBucket {
            words: index
                .get(pattern.as_str())
                .iter()
                .filter(|&&neighbour| neighbour != word.text())
                .map(|&neighbour| neighbour.to_string())
                .collect(),
            pattern: pattern.to_string(),
        })
        .collect();

    Ok(NeighbourReport {
        total_neighbours: index.neighbours_of(word.text()).count(),
        word: word.text().to_string(),
        buckets,
        dictionary_size: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn neighbours_grouped_by_pattern() {
        let words = words_from_slice(&["dog", "cog", "log", "dot", "cold"]);

        let report = find_neighbours("dog", &words).unwrap();

        assert_eq!(report.word, "dog");
        assert_eq!(report.dictionary_size, 4);
        assert_eq!(report.total_neighbours, 3);

        let patterns: Vec<&str> = report.buckets.iter().map(|b| b.pattern.as_str()).collect();
        assert_eq!(patterns, ["?og", "d?g", "do?"]);
        assert_eq!(report.buckets[0].words, ["cog", "log"]);
        assert!(report.buckets[1].words.is_empty());
        assert_eq!(report.buckets[2].words, ["dot"]);
    }

    #[test]
    fn isolated_word_has_no_neighbours() {
        let words = words_from_slice(&["yak", "dog"]);

        let report = find_neighbours("yak", &words).unwrap();

        assert_eq!(report.total_neighbours, 0);
        assert!(report.buckets.iter().all(|b| b.words.is_empty()));
    }

    #[test]
    fn word_not_in_dictionary_is_error() {
        let words = words_from_slice(&["dog", "cog"]);
        assert!(matches!(
            find_neighbours("log", &words),
            Err(CommandError::NotInDictionary(ref w)) if w == "log"
        ));
    }

    #[test]
    fn invalid_word_is_error() {
        let words = words_from_slice(&["dog"]);
        assert!(find_neighbours("d-g", &words).is_err());
    }
}
