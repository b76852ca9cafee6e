//! Graphwalk Core Library
//!
//! Shortest paths with Dijkstra's algorithm and word ladders with
//! breadth-first search, plus the loaders, configuration, and logging
//! shared by the `graphwalk` binary.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;
