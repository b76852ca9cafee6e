//! Word ladders: shortest chains of one-edit steps between two words
//!
//! - Dictionary loading
//! - The one-edit adjacency scan
//! - Level-synchronised breadth-first search

pub mod dictionary;
pub mod edit;
pub mod search;
pub mod types;

pub use dictionary::{load_dictionary, WordDictionary};
pub use edit::{edit_distance_within, is_one_edit_apart};
pub use search::find_shortest_ladder;
pub use types::{Ladder, LadderError};
