use crate::graph::types::{Edge, Graph};

/// Trait for providing graph adjacency to the search algorithms.
///
/// Implementors guarantee every edge's `dst` is below `vertex_count()`.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn outbound_edges(&self, vertex: usize) -> &[Edge];
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn outbound_edges(&self, vertex: usize) -> &[Edge] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
