//! Breadth-first search for the shortest word ladder
//!
//! The dictionary is treated as an implicit graph: words are vertices and two
//! words share an edge when one letter substitution turns one into the other.
//! Edges are found through the [`NeighbourIndex`], so a full search costs
//! O(n·l) for the index plus O(v + e) for the traversal.

use super::NeighbourIndex;
use crate::core::Pattern;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Sentinel returned by [`shortest_transformation_length`] when no ladder exists
pub const UNREACHABLE: isize = -1;

/// BFS state: words awaiting expansion and every word already discovered
#[derive(Debug, Default)]
pub struct Frontier<'a> {
    queue: VecDeque<(&'a str, usize)>,
    visited: FxHashSet<&'a str>,
}

impl<'a> Frontier<'a> {
    /// Frontier holding only `start`, at distance 0
    #[must_use]
    pub fn seeded(start: &'a str) -> Self {
        let mut frontier = Self::default();
        frontier.visited.insert(start);
        frontier.queue.push_back((start, 0));
        frontier
    }

    /// Take the next word to expand, in non-decreasing distance order
    pub fn pop(&mut self) -> Option<(&'a str, usize)> {
        self.queue.pop_front()
    }

    /// Whether `word` has already been discovered
    #[must_use]
    pub fn is_visited(&self, word: &str) -> bool {
        self.visited.contains(word)
    }

    /// Mark `word` as discovered
    pub fn mark_visited(&mut self, word: &'a str) {
        self.visited.insert(word);
    }

    /// Queue `word` for expansion at `distance`
    pub fn enqueue(&mut self, word: &'a str, distance: usize) {
        self.queue.push_back((word, distance));
    }

    /// Words still waiting for expansion, head first
    pub fn queued(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.queue.iter().copied()
    }

    /// Every word discovered so far
    #[must_use]
    pub fn visited(&self) -> &FxHashSet<&'a str> {
        &self.visited
    }
}

/// Length of the shortest transformation sequence from `start` to `end`
///
/// Every intermediate word and `end` itself must be in `words`; `start` need not
/// be. Returns 0 when `start == end` without looking at `words`, and
/// [`UNREACHABLE`] (-1) when no sequence exists.
///
/// # Examples
/// ```
/// use word_ladder::ladder::shortest_transformation_length;
///
/// let words = ["hit", "dot", "dog", "cog", "hot", "log"];
/// assert_eq!(shortest_transformation_length("hit", "cog", &words), 4);
/// assert_eq!(shortest_transformation_length("hit", "hit", &words), 0);
/// assert_eq!(shortest_transformation_length("hit", "zzz", &words), -1);
/// ```
#[must_use]
pub fn shortest_transformation_length<S: AsRef<str>>(
    start: &str,
    end: &str,
    words: &[S],
) -> isize {
    ladder_length(start, end, words)
        .and_then(|distance| isize::try_from(distance).ok())
        .unwrap_or(UNREACHABLE)
}

/// Same search as [`shortest_transformation_length`], with `None` for unreachable
#[must_use]
pub fn ladder_length<S: AsRef<str>>(start: &str, end: &str, words: &[S]) -> Option<usize> {
    if start == end {
        return Some(0);
    }

    let index = NeighbourIndex::build(words);
    debug!(
        words = words.len(),
        patterns = index.len(),
        "built neighbour index"
    );

    search_with_index(&index, start, end)
}

/// Run the breadth-first search against a prebuilt index
///
/// The index is only read, so one index can serve many searches, including
/// concurrent ones. Each call owns its own [`Frontier`].
#[must_use]
pub fn search_with_index(index: &NeighbourIndex<'_>, start: &str, end: &str) -> Option<usize> {
    if start == end {
        return Some(0);
    }

    let mut frontier = Frontier::seeded(start);

    while let Some((word, distance)) = frontier.pop() {
        if let Some(found) = visit_word_neighbours(word, end, index, &mut frontier, distance) {
            trace!(start, end, distance = found, "ladder found");
            return Some(found);
        }
    }

    trace!(
        start,
        end,
        explored = frontier.visited().len(),
        "no ladder exists"
    );
    None
}

/// Visit every neighbour of `word`, one pattern bucket at a time
///
/// Returns the distance to `end` as soon as it is discovered, otherwise queues
/// unvisited neighbours at `distance + 1` and returns `None`.
pub fn visit_word_neighbours<'a>(
    word: &str,
    end: &str,
    index: &NeighbourIndex<'a>,
    frontier: &mut Frontier<'a>,
    distance: usize,
) -> Option<usize> {
    for pattern in Pattern::all(word) {
        for &neighbour in index.get(pattern.as_str()) {
            if let Some(found) = visit_neighbour(neighbour, end, frontier, distance) {
                return Some(found);
            }
        }
    }
    None
}

/// Visit a single neighbour reached from a word at `distance`
///
/// `end` is checked before enqueueing, so a ladder is reported one level
/// earlier than a check after dequeueing would.
pub fn visit_neighbour<'a>(
    neighbour: &'a str,
    end: &str,
    frontier: &mut Frontier<'a>,
    distance: usize,
) -> Option<usize> {
    if frontier.is_visited(neighbour) {
        return None;
    }

    if neighbour == end {
        return Some(distance + 1);
    }

    frontier.mark_visited(neighbour);
    frontier.enqueue(neighbour, distance + 1);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted_queue<'a>(frontier: &Frontier<'a>) -> Vec<(&'a str, usize)> {
        let mut queued: Vec<(&str, usize)> = frontier.queued().collect();
        queued.sort_unstable();
        queued
    }

    #[test]
    fn example_ladder() {
        //                 log
        //               /
        // hit - hot - dot - dog
        //                       \
        //                        cog
        let words = ["hit", "dot", "dog", "cog", "hot", "log"];
        assert_eq!(shortest_transformation_length("hit", "cog", &words), 4);
    }

    #[test]
    fn general_case() {
        //            ------- dot -------
        //           /       /           \
        // hit - hot ---- pot -- poc ---- doc
        //           \       \   /
        //             hop -- pop
        let words = ["hit", "hot", "hop", "pot", "dot", "pop", "poc", "doc"];
        assert_eq!(shortest_transformation_length("hit", "doc", &words), 3);
    }

    #[test]
    fn start_is_end() {
        let words = ["hit", "dot", "dog", "cog", "hot", "log"];
        assert_eq!(shortest_transformation_length("hit", "hit", &words), 0);
    }

    #[test]
    fn start_is_end_ignores_dictionary() {
        let empty: [&str; 0] = [];
        assert_eq!(shortest_transformation_length("abc", "abc", &empty), 0);
        assert_eq!(shortest_transformation_length("abc", "abc", &["xyz"]), 0);
    }

    #[test]
    fn end_is_unreachable() {
        // No "dot" to bridge hot and dog
        let words = ["hit", "dog", "cog", "hot", "log"];
        assert_eq!(shortest_transformation_length("hit", "cog", &words), UNREACHABLE);
    }

    #[test]
    fn end_missing_from_dictionary() {
        let words = ["hit", "hot", "dot"];
        assert_eq!(shortest_transformation_length("hit", "dog", &words), -1);
        assert_eq!(ladder_length("hit", "dog", &words), None);
    }

    #[test]
    fn empty_dictionary_is_unreachable() {
        let empty: [&str; 0] = [];
        assert_eq!(shortest_transformation_length("hit", "hot", &empty), -1);
    }

    #[test]
    fn start_need_not_be_in_dictionary() {
        let words = ["hot", "dot"];
        assert_eq!(ladder_length("hit", "dot", &words), Some(2));
    }

    #[test]
    fn single_step() {
        assert_eq!(ladder_length("cold", "cord", &["cord"]), Some(1));
    }

    #[test]
    fn mismatched_lengths_do_not_connect() {
        let words = ["hot", "hots", "dot"];
        assert_eq!(ladder_length("hit", "hots", &words), None);
        assert_eq!(ladder_length("hit", "dot", &words), Some(2));
    }

    #[test]
    fn duplicate_words_do_not_change_distance() {
        let words = ["hot", "hot", "dot", "dot", "dog"];
        assert_eq!(ladder_length("hit", "dog", &words), Some(3));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let words = ["hit", "hot", "hop", "pot", "dot", "pop", "poc", "doc"];
        let first = shortest_transformation_length("hit", "doc", &words);
        let second = shortest_transformation_length("hit", "doc", &words);
        assert_eq!(first, second);
    }

    #[test]
    fn search_with_shared_index() {
        let words = ["hit", "dot", "dog", "cog", "hot", "log"];
        let index = NeighbourIndex::build(&words);

        assert_eq!(search_with_index(&index, "hit", "cog"), Some(4));
        assert_eq!(search_with_index(&index, "cog", "hit"), Some(4));
        assert_eq!(search_with_index(&index, "log", "dog"), Some(1));
        assert_eq!(search_with_index(&index, "log", "log"), Some(0));
    }

    #[test]
    fn visit_word_neighbours_end_not_found() {
        //         cop
        //       /
        //   cup - cub
        //       \
        //         sup
        let words = ["cup", "sup", "cop", "cub"];
        let index = NeighbourIndex::build(&words);
        let mut frontier = Frontier::default();
        frontier.mark_visited("cup");

        let result = visit_word_neighbours("cup", "foo", &index, &mut frontier, 0);

        assert_eq!(result, None);
        assert_eq!(sorted_queue(&frontier), [("cop", 1), ("cub", 1), ("sup", 1)]);
        let mut visited: Vec<&str> = frontier.visited().iter().copied().collect();
        visited.sort_unstable();
        assert_eq!(visited, ["cop", "cub", "cup", "sup"]);
    }

    #[test]
    fn visit_word_neighbours_end_found() {
        let words = ["cup", "sup", "cop", "cub"];
        let index = NeighbourIndex::build(&words);
        let mut frontier = Frontier::default();
        frontier.mark_visited("cup");

        let result = visit_word_neighbours("cup", "cop", &index, &mut frontier, 0);

        assert_eq!(result, Some(1));
    }

    #[test]
    fn visit_word_neighbours_skips_visited() {
        let words = ["cup", "sup", "cop"];
        let index = NeighbourIndex::build(&words);
        let mut frontier = Frontier::default();
        frontier.mark_visited("cup");
        frontier.mark_visited("sup");

        let result = visit_word_neighbours("cup", "zzz", &index, &mut frontier, 2);

        assert_eq!(result, None);
        assert_eq!(sorted_queue(&frontier), [("cop", 3)]);
    }

    #[test]
    fn visit_neighbour_end_not_found() {
        let mut frontier = Frontier::default();

        let result = visit_neighbour("foo", "spam", &mut frontier, 0);

        assert_eq!(result, None);
        assert_eq!(frontier.queued().collect::<Vec<_>>(), [("foo", 1)]);
        assert!(frontier.is_visited("foo"));
        assert_eq!(frontier.visited().len(), 1);
    }

    #[test]
    fn visit_neighbour_end_found() {
        let mut frontier = Frontier::default();

        let result = visit_neighbour("spam", "spam", &mut frontier, 0);

        assert_eq!(result, Some(1));
        assert_eq!(frontier.queued().count(), 0);
    }

    #[test]
    fn visit_neighbour_already_visited_end_is_ignored() {
        let mut frontier = Frontier::default();
        frontier.mark_visited("spam");

        assert_eq!(visit_neighbour("spam", "spam", &mut frontier, 4), None);
    }

    #[test]
    fn seeded_frontier() {
        let mut frontier = Frontier::seeded("hit");
        assert!(frontier.is_visited("hit"));
        assert_eq!(frontier.pop(), Some(("hit", 0)));
        assert_eq!(frontier.pop(), None);
    }

    /// Shortest ladder over an explicitly materialised adjacency graph
    fn reference_length(start: &str, end: &str, words: &[String]) -> Option<usize> {
        if start == end {
            return Some(0);
        }

        let adjacent = |a: &str, b: &str| {
            a.len() == b.len() && a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() == 1
        };

        // Node 0 is start, the rest are dictionary words
        let mut nodes: Vec<&str> = vec![start];
        nodes.extend(words.iter().map(String::as_str));
        let edges: Vec<Vec<usize>> = nodes
            .iter()
            .map(|&a| {
                (0..nodes.len())
                    .filter(|&j| adjacent(a, nodes[j]))
                    .collect()
            })
            .collect();

        let mut distance = vec![None; nodes.len()];
        distance[0] = Some(0);
        let mut queue = VecDeque::from([0]);
        while let Some(node) = queue.pop_front() {
            let d = distance[node]?;
            for &next in &edges[node] {
                if distance[next].is_none() {
                    distance[next] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }

        (1..nodes.len())
            .filter(|&i| nodes[i] == end)
            .filter_map(|i| distance[i])
            .min()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn matches_reference_bfs(
            start in "[abc]{3}",
            end in "[abc]{3}",
            words in prop::collection::vec("[abc]{3}", 0..16)
        ) {
            let expected = reference_length(&start, &end, &words);
            prop_assert_eq!(ladder_length(&start, &end, &words), expected);
        }

        #[test]
        fn sentinel_agrees_with_option(
            start in "[ab]{4}",
            end in "[ab]{4}",
            words in prop::collection::vec("[ab]{4}", 0..12)
        ) {
            let length = shortest_transformation_length(&start, &end, &words);
            match ladder_length(&start, &end, &words) {
                Some(distance) => prop_assert_eq!(length, distance as isize),
                None => prop_assert_eq!(length, UNREACHABLE),
            }
        }

        #[test]
        fn start_equal_end_is_zero(
            word in "[a-z]{1,6}",
            words in prop::collection::vec("[a-z]{3}", 0..8)
        ) {
            prop_assert_eq!(shortest_transformation_length(&word, &word, &words), 0);
        }

        #[test]
        fn distance_at_least_letters_changed(
            start in "[abc]{3}",
            end in "[abc]{3}",
            words in prop::collection::vec("[abc]{3}", 0..16)
        ) {
            if let Some(distance) = ladder_length(&start, &end, &words) {
                let changed = start.bytes().zip(end.bytes()).filter(|(a, b)| a != b).count();
                prop_assert!(distance >= changed);
            }
        }
    }
}
