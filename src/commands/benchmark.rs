//! Benchmark command
//!
//! Measures search throughput over random start/end pairs of one word length.

use super::CommandError;
use crate::core::Word;
use crate::ladder::{NeighbourIndex, search_with_index};
use crate::wordlists::loader::words_of_length;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs to search
    pub count: usize,
    /// Word length to draw pairs from
    pub length: usize,
    /// Fixed seed for reproducible pairs
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, length: usize) -> Self {
        Self {
            count,
            length,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub reachable: usize,
    pub unreachable: usize,
    /// Mean distance over reachable pairs
    pub average_distance: f64,
    pub max_distance: usize,
    /// Distance → number of pairs at that distance
    pub distribution: HashMap<usize, usize>,
    pub dictionary_size: usize,
    pub index_patterns: usize,
    /// Time spent building the shared neighbour index
    pub index_build: Duration,
    /// Time spent in the searches alone
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run `config.count` searches between random words of `config.length` letters
///
/// One neighbour index is built and shared by all searches, which run in
/// parallel with their own frontiers.
///
/// # Errors
///
/// Returns an error if the dictionary has no words of the requested length.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    dictionary: &[Word],
) -> Result<BenchmarkResult, CommandError> {
    let candidates = words_of_length(dictionary, config.length);
    if candidates.is_empty() {
        return Err(CommandError::EmptyDictionary(config.length));
    }

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let pairs: Vec<(&str, &str)> = (0..config.count)
        .map(|_| {
            let start = &candidates[rng.random_range(0..candidates.len())];
            let end = &candidates[rng.random_range(0..candidates.len())];
            (start.text(), end.text())
        })
        .collect();

    let build_start = Instant::now();
    let index = NeighbourIndex::build(&candidates);
    let index_build = build_start.elapsed();
    debug!(
        words = candidates.len(),
        patterns = index.len(),
        elapsed_us = index_build.as_micros() as u64,
        "benchmark index ready"
    );

    let pb = ProgressBar::new(pairs.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let search_start = Instant::now();
    let distances: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|&(from, to)| {
            let distance = search_with_index(&index, from, to);
            pb.inc(1);
            distance
        })
        .collect();

    let duration = search_start.elapsed();
    pb.finish_with_message("Complete!");

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &distance in distances.iter().flatten() {
        *distribution.entry(distance).or_insert(0) += 1;
    }

    let reachable: usize = distribution.values().sum();
    let total_distance: usize = distances.iter().flatten().sum();
    let total_pairs = pairs.len();

    Ok(BenchmarkResult {
        total_pairs,
        reachable,
        unreachable: total_pairs - reachable,
        average_distance: if reachable > 0 {
            total_distance as f64 / reachable as f64
        } else {
            0.0
        },
        max_distance: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        dictionary_size: candidates.len(),
        index_patterns: index.len(),
        index_build,
        duration,
        searches_per_second: if duration.is_zero() {
            0.0
        } else {
            total_pairs as f64 / duration.as_secs_f64()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig::new(50, 3).with_seed(7);

        let result = run_benchmark(&config, &words).unwrap();

        assert_eq!(result.total_pairs, 50);
        assert_eq!(result.reachable + result.unreachable, 50);
        assert_eq!(result.dictionary_size, 300);
        assert!(result.index_patterns > 0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig::new(40, 4).with_seed(11);

        let result = run_benchmark(&config, &words).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.reachable);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig::new(60, 3).with_seed(3);

        let result = run_benchmark(&config, &words).unwrap();

        if result.reachable > 0 {
            assert!(result.average_distance <= result.max_distance as f64);
            assert!(result.distribution.contains_key(&result.max_distance));
        } else {
            assert!(result.average_distance.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn benchmark_seed_is_reproducible() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig::new(30, 3).with_seed(42);

        let first = run_benchmark(&config, &words).unwrap();
        let second = run_benchmark(&config, &words).unwrap();

        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.unreachable, second.unreachable);
    }

    #[test]
    fn benchmark_connected_dictionary() {
        // hit - hot - dot - dog, all connected
        let words = words_from_slice(&["hit", "hot", "dot", "dog"]);
        let config = BenchmarkConfig::new(25, 3).with_seed(1);

        let result = run_benchmark(&config, &words).unwrap();

        assert_eq!(result.unreachable, 0);
        assert!(result.max_distance <= 3);
    }

    #[test]
    fn benchmark_zero_pairs() {
        let words = words_from_slice(&["hit", "hot"]);
        let config = BenchmarkConfig::new(0, 3);

        let result = run_benchmark(&config, &words).unwrap();

        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.reachable, 0);
        assert_eq!(result.max_distance, 0);
    }

    #[test]
    fn benchmark_rate_excludes_index_build() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig::new(20, 4).with_seed(5);

        let result = run_benchmark(&config, &words).unwrap();

        let expected = if result.duration.is_zero() {
            0.0
        } else {
            result.total_pairs as f64 / result.duration.as_secs_f64()
        };
        assert!((result.searches_per_second - expected).abs() < 1e-6);
    }

    #[test]
    fn benchmark_missing_length_is_error() {
        let words = words_from_slice(&["hit", "hot"]);
        let config = BenchmarkConfig::new(5, 7);

        assert!(matches!(
            run_benchmark(&config, &words),
            Err(CommandError::EmptyDictionary(7))
        ));
    }
}
