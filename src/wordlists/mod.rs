//! Word lists for ladder search
//!
//! Provides an embedded dictionary compiled into the binary, plus loaders for
//! custom word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
