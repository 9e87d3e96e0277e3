//! Wildcard patterns used to group neighbouring words
//!
//! A pattern is a word with exactly one position replaced by [`WILDCARD`]:
//! `"hot"` produces `"?ot"`, `"h?t"` and `"ho?"`. Two distinct words of equal
//! length are adjacent exactly when they share one of these patterns.

use std::borrow::Borrow;
use std::fmt;

/// Marker standing in for the masked letter
pub const WILDCARD: char = '?';

/// A word with one letter masked by [`WILDCARD`]
///
/// Hashes and compares like its text, so maps keyed by `Pattern` can be queried
/// with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(String);

impl Pattern {
    /// Build the pattern that masks the letter at `position`
    ///
    /// Positions count characters, not bytes. A `position` past the end of the
    /// word masks nothing and yields the word unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Pattern;
    ///
    /// assert_eq!(Pattern::masking("spam", 0).as_str(), "?pam");
    /// assert_eq!(Pattern::masking("spam", 2).as_str(), "sp?m");
    /// assert_eq!(Pattern::masking("spam", 3).as_str(), "spa?");
    /// ```
    #[must_use]
    pub fn masking(word: &str, position: usize) -> Self {
        let masked = word
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == position { WILDCARD } else { ch })
            .collect();
        Self(masked)
    }

    /// All patterns of `word`, in left-to-right position order
    pub fn all(word: &str) -> impl Iterator<Item = Self> + '_ {
        (0..word.chars().count()).map(move |position| Self::masking(word, position))
    }

    /// Get the pattern as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether `word` fits this pattern
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Pattern;
    ///
    /// let pattern = Pattern::masking("dog", 0);
    /// assert!(pattern.matches("cog"));
    /// assert!(pattern.matches("log"));
    /// assert!(!pattern.matches("dot"));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.0.chars().count() == word.chars().count()
            && self
                .0
                .chars()
                .zip(word.chars())
                .all(|(p, w)| p == WILDCARD || p == w)
    }
}

impl Borrow<str> for Pattern {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
