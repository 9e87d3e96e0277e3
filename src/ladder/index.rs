//! Neighbour index: wildcard pattern → words matching it
//!
//! Finding every neighbour of a word by scanning the whole dictionary costs
//! O(n) per word. Grouping words by their wildcard patterns up front costs
//! O(n·l) once, after which the neighbours of a word are the union of its
//! l pattern buckets.
//!
//! ```text
//! "?ot" : [dot, hot]
//! "h?t" : [hit, hot]
//! "do?" : [dot, dog]
//! "?og" : [dog, cog, log]
//! ```

use crate::core::Pattern;
use rustc_hash::FxHashMap;

/// Precomputed mapping from pattern to the words that satisfy it
///
/// Buckets keep insertion order and are not deduplicated. The index borrows the
/// words it was built from and is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct NeighbourIndex<'w> {
    buckets: FxHashMap<Pattern, Vec<&'w str>>,
}

impl<'w> NeighbourIndex<'w> {
    /// Group `words` by every wildcard pattern they satisfy
    ///
    /// Word lengths are not checked: a word of a different length lands in
    /// buckets that no query of the searched length will ever hit.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::ladder::NeighbourIndex;
    ///
    /// let index = NeighbourIndex::build(&["hit", "hot", "dot"]);
    /// assert_eq!(index.get("h?t"), ["hit", "hot"]);
    /// assert_eq!(index.get("?ot"), ["hot", "dot"]);
    /// assert!(index.get("x?z").is_empty());
    /// ```
    #[must_use]
    pub fn build<S: AsRef<str>>(words: &'w [S]) -> Self {
        let mut buckets: FxHashMap<Pattern, Vec<&'w str>> = FxHashMap::default();

        for word in words {
            let word = word.as_ref();
            for pattern in Pattern::all(word) {
                buckets.entry(pattern).or_default().push(word);
            }
        }

        Self { buckets }
    }

    /// Words matching `pattern`, in insertion order
    ///
    /// Returns an empty slice for unknown patterns.
    #[must_use]
    pub fn get(&self, pattern: &str) -> &[&'w str] {
        self.buckets.get(pattern).map_or(&[], Vec::as_slice)
    }

    /// Every indexed word sharing a pattern with `word`, excluding `word` itself
    ///
    /// Yields in pattern order (left to right), then insertion order. A word
    /// listed twice in the dictionary is yielded twice.
    pub fn neighbours_of<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'w str> + 'a {
        Pattern::all(word)
            .flat_map(move |pattern| self.get(pattern.as_str()).iter().copied())
            .filter(move |&neighbour| neighbour != word)
    }

    /// Iterate over every (pattern, bucket) pair in arbitrary order
    pub fn patterns(&self) -> impl Iterator<Item = (&Pattern, &[&'w str])> {
        self.buckets
            .iter()
            .map(|(pattern, words)| (pattern, words.as_slice()))
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no word has been indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
