//! Path reconstruction from Dijkstra predecessor links

use crate::graph::types::DistanceResult;

/// Rebuild the vertex sequence from the query source to `destination`.
///
/// Follows predecessor links back from `destination` and reverses them.
/// Callers should check [`DistanceResult::is_reachable`] first: an
/// unreached vertex yields just `[destination]`, and an out-of-range
/// vertex yields an empty path.
pub fn extract_path(result: &DistanceResult, destination: usize) -> Vec<usize> {
    if destination >= result.vertex_count() {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(vertex) = current {
        path.push(vertex);
        current = result.predecessor(vertex);
    }

    path.reverse();
    path
}
