use serde::Serialize;

use crate::bail_invalid;
use crate::error::Result;

/// Edge weight. Unsigned, so every graph satisfies Dijkstra's precondition.
pub type Weight = u32;

/// Accumulated path cost
pub type Distance = u64;

/// Flat encoding of "unreachable" for callers that want a plain distance vector
pub const UNREACHABLE: Distance = Distance::MAX;

/// An outgoing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub dst: usize,
    pub weight: Weight,
}

/// Weighted graph stored as per-vertex outgoing edge lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Like `new`, but `None` when the vertex table cannot be allocated
    pub fn try_new(vertex_count: usize) -> Option<Self> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).ok()?;
        adjacency.resize_with(vertex_count, Vec::new);
        Some(Self { adjacency })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Add a directed edge. Both endpoints must be existing vertices.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> Result<()> {
        let n = self.vertex_count();
        for vertex in [src, dst] {
            if vertex >= n {
                bail_invalid!(
                    "edge endpoint",
                    format!("{} (graph has {} vertices)", vertex, n)
                );
            }
        }
        self.adjacency[src].push(Edge { dst, weight });
        Ok(())
    }

    /// Add an edge in both directions
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: Weight) -> Result<()> {
        self.add_edge(a, b, weight)?;
        if a != b {
            self.add_edge(b, a, weight)?;
        }
        Ok(())
    }

    /// Cheapest direct edge from `src` to `dst`, if any
    pub fn edge_weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.adjacency
            .get(src)?
            .iter()
            .filter(|edge| edge.dst == dst)
            .map(|edge| edge.weight)
            .min()
    }

    /// Total weight of a vertex sequence using the cheapest edge between each
    /// consecutive pair. `None` if some pair has no connecting edge.
    pub fn path_cost(&self, path: &[usize]) -> Option<Distance> {
        path.windows(2).try_fold(0, |total: Distance, pair| {
            self.edge_weight(pair[0], pair[1])
                .map(|w| total.saturating_add(Distance::from(w)))
        })
    }
}

/// Outcome of a single-source shortest path query.
///
/// Only produced by [`crate::graph::dijkstra_shortest_paths`]; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceResult {
    pub(crate) source: usize,
    pub(crate) distances: Vec<Option<Distance>>,
    pub(crate) predecessors: Vec<Option<usize>>,
}

impl DistanceResult {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance to `vertex`, `None` when unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Predecessor of `vertex` on its shortest path, `None` for the source
    /// and for unreached vertices
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Reachable vertices with their distances, in ascending vertex order
    pub fn reachable(&self) -> impl Iterator<Item = (usize, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(vertex, distance)| distance.map(|d| (vertex, d)))
    }

    /// Distances with [`UNREACHABLE`] standing in for missing entries
    pub fn distances_with_sentinel(&self) -> Vec<Distance> {
        self.distances
            .iter()
            .map(|d| d.unwrap_or(UNREACHABLE))
            .collect()
    }
}
