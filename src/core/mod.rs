//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types. They are pure and
//! cheap to construct; all validation happens in `Word::new`.

mod pattern;
mod word;

pub use pattern::{Pattern, WILDCARD};
pub use word::{Word, WordError};
