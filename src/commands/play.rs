//! Interactive ladder game
//!
//! The player climbs from the start word to the end word one substitution at a
//! time; the search reports how far the optimal ladder still is.

use super::{CommandError, parse_endpoints};
use crate::core::{Word, WordError};
use crate::ladder::{Frontier, NeighbourIndex, search_with_index, visit_word_neighbours};
use crate::output::formatters::{format_distance, highlight_change};
use crate::wordlists::loader::words_of_length;
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{self, Write};
use thiserror::Error;

/// Reasons a played word is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),

    #[error("'{next}' is not one letter away from '{current}'")]
    NotAdjacent { current: String, next: String },

    #[error("'{0}' is already on the ladder")]
    AlreadyUsed(String),

    #[error("The ladder already ends on '{0}'")]
    AlreadySolved(String),
}

/// Outcome of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Still climbing, `remaining` substitutions from the end
    Accepted { remaining: Option<usize> },
    /// The end word was reached
    Solved { steps: usize, optimal: usize },
}

/// State of one ladder game
pub struct LadderGame<'w> {
    index: NeighbourIndex<'w>,
    members: FxHashSet<&'w str>,
    end: Word,
    path: Vec<Word>,
    optimal: usize,
}

impl<'w> LadderGame<'w> {
    /// Start a game from `start` to `end` over `words`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoints have different lengths
    /// - `end` is not in `words`
    /// - No ladder connects the endpoints
    pub fn new(start: Word, end: Word, words: &'w [Word]) -> Result<Self, CommandError> {
        if start.len() != end.len() {
            return Err(CommandError::LengthMismatch {
                start_len: start.len(),
                end_len: end.len(),
                start: start.text().to_string(),
                end: end.text().to_string(),
            });
        }

        let members: FxHashSet<&'w str> = words.iter().map(Word::text).collect();
        if !members.contains(end.text()) {
            return Err(CommandError::NotInDictionary(end.text().to_string()));
        }

        let index = NeighbourIndex::build(words);
        let optimal = search_with_index(&index, start.text(), end.text()).ok_or_else(|| {
            CommandError::NoLadder {
                start: start.text().to_string(),
                end: end.text().to_string(),
            }
        })?;

        Ok(Self {
            index,
            members,
            end,
            path: vec![start],
            optimal,
        })
    }

    /// Word the player is currently on
    #[must_use]
    pub fn current(&self) -> &Word {
        // The path always holds at least the start word
        &self.path[self.path.len() - 1]
    }

    /// Target word
    #[must_use]
    pub fn end(&self) -> &Word {
        &self.end
    }

    /// Every word on the ladder so far, start first
    #[must_use]
    pub fn path(&self) -> &[Word] {
        &self.path
    }

    /// Substitutions made so far
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// Length of the shortest ladder from the start word
    #[must_use]
    pub fn optimal(&self) -> usize {
        self.optimal
    }

    /// Whether the player stands on the end word
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self.current() == self.end
    }

    /// Shortest remaining distance from the current word
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        search_with_index(&self.index, self.current().text(), self.end.text())
    }

    /// Play `input` as the next rung of the ladder
    ///
    /// # Errors
    ///
    /// Returns a `MoveError` if the ladder is already solved, or the word is
    /// invalid, not in the dictionary, not adjacent to the current word, or
    /// already on the ladder.
    pub fn play(&mut self, input: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_solved() {
            return Err(MoveError::AlreadySolved(self.end.text().to_string()));
        }

        let next = Word::new(input)?;

        if !self.members.contains(next.text()) {
            return Err(MoveError::NotInDictionary(next.text().to_string()));
        }

        if !self.current().is_adjacent(&next) {
            return Err(MoveError::NotAdjacent {
                current: self.current().text().to_string(),
                next: next.text().to_string(),
            });
        }

        if self.path.contains(&next) {
            return Err(MoveError::AlreadyUsed(next.text().to_string()));
        }

        let solved = next == self.end;
        self.path.push(next);

        if solved {
            Ok(MoveOutcome::Solved {
                steps: self.steps(),
                optimal: self.optimal,
            })
        } else {
            Ok(MoveOutcome::Accepted {
                remaining: self.remaining(),
            })
        }
    }

    /// Take back the last move, returning the removed word
    pub fn undo(&mut self) -> Option<Word> {
        if self.path.len() > 1 {
            self.path.pop()
        } else {
            None
        }
    }

    /// An unused neighbour of the current word on the shortest ladder that
    /// avoids every word already played
    ///
    /// Returns `None` once solved, or when every way on runs through used words.
    #[must_use]
    pub fn hint(&self) -> Option<&'w str> {
        if self.is_solved() {
            return None;
        }

        self.index
            .neighbours_of(self.current().text())
            .filter(|neighbour| !self.path.iter().any(|used| used.text() == *neighbour))
            .filter_map(|neighbour| {
                self.distance_avoiding_path(neighbour)
                    .map(|distance| (distance, neighbour))
            })
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, neighbour)| neighbour)
    }

    /// Distance from `from` to the end word without stepping on the ladder
    fn distance_avoiding_path(&self, from: &str) -> Option<usize> {
        if from == self.end.text() {
            return Some(0);
        }

        let mut frontier = Frontier::seeded(from);
        for used in &self.path {
            frontier.mark_visited(used.text());
        }

        while let Some((word, distance)) = frontier.pop() {
            if let Some(found) =
                visit_word_neighbours(word, self.end.text(), &self.index, &mut frontier, distance)
            {
                return Some(found);
            }
        }
        None
    }
}

/// Run the interactive ladder game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the endpoints are invalid, no ladder connects them, or
/// there's an I/O error reading user input.
pub fn run_play(start: &str, end: &str, dictionary: &[Word]) -> Result<(), CommandError> {
    let (start, end) = parse_endpoints(start, end)?;
    let candidates = words_of_length(dictionary, start.len());
    let mut game = LadderGame::new(start, end, &candidates)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Ladder - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Climb from {} to {}, changing one letter per step.",
        game.current().text().to_uppercase().bright_cyan().bold(),
        game.end().text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "The shortest ladder takes {}.\n",
        format_distance(Some(game.optimal()))
    );
    println!("Commands: 'hint' for a suggestion, 'undo' to take back a step, 'quit' to exit\n");

    if game.is_solved() {
        print_victory(&game, 0, 0);
        return Ok(());
    }

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Step {}: on {} ({} to go)",
            game.steps(),
            game.current().text().to_uppercase().bright_white().bold(),
            format_distance(game.remaining())
        );

        let input = get_user_input("Next word")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "undo" | "u" => match game.undo() {
                Some(word) => println!("✓ Took back {}\n", word.text().to_uppercase()),
                None => println!("Nothing to undo!\n"),
            },
            "hint" | "h" => match game.hint() {
                Some(word) => println!("💡 Try {}\n", word.to_uppercase().bright_green()),
                None => println!("Nothing to suggest.\n"),
            },
            _ => {
                let previous = game.current().text().to_string();
                match game.play(&input) {
                    Ok(MoveOutcome::Accepted { .. }) => {
                        println!(
                            "  {} → {}\n",
                            previous.to_uppercase(),
                            highlight_change(&previous, &input)
                        );
                    }
                    Ok(MoveOutcome::Solved { steps, optimal }) => {
                        print_victory(&game, steps, optimal);
                        return Ok(());
                    }
                    Err(e) => println!("❌ {e}\n"),
                }
            }
        }
    }
}

fn print_victory(game: &LadderGame<'_>, steps: usize, optimal: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  L A D D E R   C L I M B E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let verdict = if steps == optimal {
        "🏆 Optimal ladder!".bright_yellow().bold()
    } else {
        format!("✓ Solved, {} more than optimal", steps - optimal)
            .bright_white()
            .bold()
    };
    println!("\n  {verdict}");
    println!(
        "  {} used, shortest possible {}",
        format_distance(Some(steps)),
        format_distance(Some(optimal))
    );

    println!("\n  Ladder:");
    for (i, word) in game.path().iter().enumerate() {
        println!(
            "    {}. {}",
            i.to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
