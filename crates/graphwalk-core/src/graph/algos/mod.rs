//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths over non-negative weights

pub mod dijkstra;

pub use dijkstra::dijkstra_shortest_paths;
