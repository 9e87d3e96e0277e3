//! Word Ladder
//!
//! Finds the length of the shortest word ladder between two words: each step
//! changes exactly one letter, and every word on the way must be in the
//! dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::ladder::shortest_transformation_length;
//!
//! let words = ["hit", "dot", "dog", "cog", "hot", "log"];
//!
//! // hit → hot → dot → dog → cog
//! assert_eq!(shortest_transformation_length("hit", "cog", &words), 4);
//!
//! // No ladder
//! assert_eq!(shortest_transformation_length("hit", "cat", &words), -1);
//! ```

// Core domain types
pub mod core;

// Neighbour index and breadth-first search
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use ladder::{UNREACHABLE, shortest_transformation_length};
