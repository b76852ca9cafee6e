//! Weighted graphs and single-source shortest paths
//!
//! - Graph storage and the text loader
//! - Dijkstra's algorithm with lazy deletion
//! - Path reconstruction from predecessor links
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod load;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::dijkstra_shortest_paths;
pub use load::{load_graph, parse_graph, LoadOptions};
pub use path::extract_path;
pub use traversal::GraphProvider;
pub use types::{Distance, DistanceResult, Edge, Graph, Weight, UNREACHABLE};
