//! Dictionary word representation
//!
//! A Word is a validated, lowercase ASCII token. Length is fixed per word but not
//! across the crate: ladders are searched within one length at a time.

use super::Pattern;
use std::fmt;
use thiserror::Error;

/// A validated dictionary word
///
/// Stores the normalized (lowercase) text. Equality is by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // Validated ASCII, so bytes == letters
        self.text.len()
    }

    /// Always false for a validated word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All wildcard patterns of this word, left to right
    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        Pattern::all(&self.text)
    }

    /// Check whether two words differ in exactly one position
    ///
    /// Distinct words are adjacent when `other` fits one of this word's
    /// patterns. Words of different lengths are never adjacent.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cold = Word::new("cold").unwrap();
    /// assert!(cold.is_adjacent(&Word::new("cord").unwrap()));
    /// assert!(!cold.is_adjacent(&Word::new("card").unwrap()));
    /// assert!(!cold.is_adjacent(&cold));
    /// ```
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self != other && self.patterns().any(|pattern| pattern.matches(&other.text))
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
