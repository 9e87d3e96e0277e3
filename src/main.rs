//! Word Ladder - CLI
//!
//! Shortest word-ladder search with solve, neighbour inspection, benchmark and
//! interactive play modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, find_neighbours, run_benchmark, run_play, solve_ladder,
    },
    core::Word,
    output::{print_benchmark_result, print_neighbour_report, print_solve_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders: change one letter at a time, stay in the dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Show debug logging and extra detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder length between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to reach
        end: String,
    },

    /// List the dictionary neighbours of a word
    Neighbours {
        /// Word to inspect
        word: String,
    },

    /// Benchmark searches between random word pairs
    Benchmark {
        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Word length to draw pairs from
        #[arg(short, long, default_value = "3")]
        length: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Climb a ladder interactively
    Play {
        /// Word to start from
        start: String,

        /// Word to reach
        end: String,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to load word list '{path}'")),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_wordlist(&cli.wordlist)?;
    tracing::info!(words = dictionary.len(), wordlist = %cli.wordlist, "dictionary loaded");

    match cli.command {
        Commands::Solve { start, end } => {
            let result = solve_ladder(SolveConfig::new(start, end), &dictionary)?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Neighbours { word } => {
            let report = find_neighbours(&word, &dictionary)?;
            print_neighbour_report(&report);
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            let mut config = BenchmarkConfig::new(count, length);
            config.seed = seed;
            println!("Running benchmark on {count} random {length}-letter pairs...");
            let result = run_benchmark(&config, &dictionary)?;
            print_benchmark_result(&result);
        }
        Commands::Play { start, end } => run_play(&start, &end, &dictionary)?,
    }

    Ok(())
}
