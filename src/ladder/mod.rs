//! Word ladder search
//!
//! Builds the pattern-bucketed neighbour index once, then runs a breadth-first
//! search over the implicit word graph it describes.

mod index;
mod search;

pub use index::NeighbourIndex;
pub use search::{
    Frontier, UNREACHABLE, ladder_length, search_with_index, shortest_transformation_length,
    visit_neighbour, visit_word_neighbours,
};
