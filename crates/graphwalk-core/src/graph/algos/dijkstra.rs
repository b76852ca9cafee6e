use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Distance, DistanceResult, Edge};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: Distance,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    visited: Vec<bool>,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<usize>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    stale_entries: usize,
}

impl DijkstraState {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            distances: vec![None; vertex_count],
            predecessors: vec![None; vertex_count],
            heap: BinaryHeap::new(),
            stale_entries: 0,
        }
    }

    /// Try to improve the distance to `edge.dst` through `from`.
    /// Edges pointing outside the vertex range are ignored.
    fn relax(&mut self, from: usize, from_distance: Distance, edge: &Edge) {
        let to = edge.dst;
        if self.visited.get(to).copied().unwrap_or(true) {
            return;
        }

        let candidate = from_distance.saturating_add(Distance::from(edge.weight));
        if self.distances[to].is_none_or(|current| candidate < current) {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
            // Older entries for `to` stay in the heap and are skipped on pop
            self.heap.push(Reverse(HeapEntry {
                vertex: to,
                distance: candidate,
            }));
        }
    }

    fn into_result(self, source: usize) -> DistanceResult {
        DistanceResult {
            source,
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}

/// Compute single-source shortest paths over non-negative edge weights.
///
/// Every vertex reachable from `source` ends up with its minimum total
/// weight and a predecessor on some shortest path. When several shortest
/// paths exist, which predecessor wins depends on heap order.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra_shortest_paths(graph: &dyn GraphProvider, source: usize) -> Result<DistanceResult> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        bail_invalid!(
            "source vertex",
            format!("{} (graph has {} vertices)", source, vertex_count)
        );
    }

    let mut state = DijkstraState::new(vertex_count);
    state.distances[source] = Some(0);
    state.heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0,
    }));

    let mut settled = 0usize;
    while let Some(Reverse(HeapEntry { vertex, distance })) = state.heap.pop() {
        if state.visited[vertex] {
            state.stale_entries += 1;
            continue;
        }
        state.visited[vertex] = true;
        settled += 1;

        for edge in graph.outbound_edges(vertex) {
            state.relax(vertex, distance, edge);
        }
    }

    debug!(
        settled,
        stale_entries = state.stale_entries,
        "dijkstra_complete"
    );
    Ok(state.into_result(source))
}

#[cfg(test)]
mod tests;
