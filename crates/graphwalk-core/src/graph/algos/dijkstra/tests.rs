use super::*;
use crate::error::GraphwalkError;
use crate::graph::path::extract_path;
use crate::graph::types::{Graph, UNREACHABLE};

/// Small xorshift generator so graph fixtures are reproducible without extra crates
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn random_graph(seed: u64, vertices: usize, edges: usize, max_weight: u32) -> Graph {
    let mut rng = XorShift(seed);
    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        let src = rng.below(vertices as u64) as usize;
        let dst = rng.below(vertices as u64) as usize;
        let weight = rng.below(u64::from(max_weight) + 1) as u32;
        graph.add_edge(src, dst, weight).unwrap();
    }
    graph
}

/// Reference distances by repeated relaxation over every edge
fn bellman_ford(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    dist[source] = Some(0);
    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            let Some(du) = dist[u] else { continue };
            for edge in graph.outbound_edges(u) {
                let candidate = du + u64::from(edge.weight);
                if dist[edge.dst].is_none_or(|d| candidate < d) {
                    dist[edge.dst] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn sample_graph() -> Graph {
    // 0 -5-> 1, 0 -3-> 2, 2 -1-> 1, 1 -2-> 3, 4 isolated
    let mut graph = Graph::new(5);
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(0, 2, 3).unwrap();
    graph.add_edge(2, 1, 1).unwrap();
    graph.add_edge(1, 3, 2).unwrap();
    graph
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let near = HeapEntry {
        vertex: 7,
        distance: 1,
    };
    let far = HeapEntry {
        vertex: 0,
        distance: 2,
    };
    let near_other = HeapEntry {
        vertex: 8,
        distance: 1,
    };

    // Lower distance compares as less regardless of vertex
    assert_eq!(near.cmp(&far), std::cmp::Ordering::Less);
    assert_eq!(far.cmp(&near), std::cmp::Ordering::Greater);
    // Equal distances fall back to vertex index
    assert_eq!(near.cmp(&near_other), std::cmp::Ordering::Less);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(far));
    heap.push(Reverse(near));
    assert_eq!(heap.pop().map(|Reverse(e)| e.vertex), Some(7));
}

#[test]
fn test_distances_on_sample_graph() {
    let graph = sample_graph();
    let result = dijkstra_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.source(), 0);
    assert_eq!(result.distance(0), Some(0));
    assert_eq!(result.distance(1), Some(4));
    assert_eq!(result.distance(2), Some(3));
    assert_eq!(result.distance(3), Some(6));
    assert_eq!(result.distance(4), None);
    assert_eq!(
        result.distances_with_sentinel(),
        vec![0, 4, 3, 6, UNREACHABLE]
    );
}

#[test]
fn test_path_through_cheaper_detour() {
    let graph = sample_graph();
    let result = dijkstra_shortest_paths(&graph, 0).unwrap();

    assert_eq!(extract_path(&result, 3), vec![0, 2, 1, 3]);
    assert_eq!(result.predecessor(0), None);
    assert_eq!(result.predecessor(4), None);
}

#[test]
fn test_source_other_than_zero() {
    let graph = sample_graph();
    let result = dijkstra_shortest_paths(&graph, 2).unwrap();

    assert_eq!(result.distance(2), Some(0));
    assert_eq!(result.distance(1), Some(1));
    assert_eq!(result.distance(3), Some(3));
    // Edges are directed: 0 is not reachable from 2
    assert_eq!(result.distance(0), None);
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = sample_graph();
    let err = dijkstra_shortest_paths(&graph, 5).unwrap_err();
    assert!(matches!(err, GraphwalkError::InvalidValue { .. }));
}

#[test]
fn test_single_vertex_graph() {
    let graph = Graph::new(1);
    let result = dijkstra_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.reachable().collect::<Vec<_>>(), vec![(0, 0)]);
    assert_eq!(extract_path(&result, 0), vec![0]);
}

#[test]
fn test_zero_weight_edges_and_self_loops() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 0, 0).unwrap();
    graph.add_edge(0, 1, 0).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    graph.add_edge(0, 2, 1).unwrap();

    let result = dijkstra_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(2), Some(0));
    assert_eq!(extract_path(&result, 2), vec![0, 1, 2]);
    assert_eq!(result.predecessor(0), None);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = Graph::new(2);
    graph.add_edge(0, 1, 10).unwrap();
    graph.add_edge(0, 1, 4).unwrap();

    let result = dijkstra_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(1), Some(4));
}

#[test]
fn test_tied_paths_only_assert_weight() {
    // Two equal-weight routes to 3: 0-1-3 and 0-2-3
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(0, 2, 1).unwrap();
    graph.add_edge(1, 3, 1).unwrap();
    graph.add_edge(2, 3, 1).unwrap();

    let result = dijkstra_shortest_paths(&graph, 0).unwrap();
    let path = extract_path(&result, 3);
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&3));
    assert_eq!(graph.path_cost(&path), Some(2));
}

#[test]
fn test_large_weights_do_not_overflow() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, u32::MAX).unwrap();
    graph.add_edge(1, 2, u32::MAX).unwrap();

    let result = dijkstra_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(2), Some(2 * u64::from(u32::MAX)));
}

#[test]
fn test_matches_bellman_ford_on_random_graphs() {
    for seed in 1..=40u64 {
        let vertices = 2 + (seed as usize % 9);
        let graph = random_graph(seed * 7919, vertices, vertices * 3, 20);
        let source = seed as usize % vertices;

        let result = dijkstra_shortest_paths(&graph, source).unwrap();
        let expected = bellman_ford(&graph, source);

        for vertex in 0..vertices {
            assert_eq!(
                result.distance(vertex),
                expected[vertex],
                "seed {} vertex {}",
                seed,
                vertex
            );
        }
    }
}

#[test]
fn test_reconstructed_paths_match_distances() {
    for seed in 1..=25u64 {
        let graph = random_graph(seed * 104_729, 8, 20, 9);
        let result = dijkstra_shortest_paths(&graph, 0).unwrap();

        for (vertex, distance) in result.reachable() {
            let path = extract_path(&result, vertex);
            assert_eq!(path.first(), Some(&0), "seed {} vertex {}", seed, vertex);
            assert_eq!(path.last(), Some(&vertex));
            assert_eq!(graph.path_cost(&path), Some(distance));
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = random_graph(42, 10, 30, 15);
    let first = dijkstra_shortest_paths(&graph, 0).unwrap();
    let second = dijkstra_shortest_paths(&graph, 0).unwrap();
    assert_eq!(first, second);
}

/// Provider whose edge lists point past its own vertex range
struct DanglingProvider {
    edges: Vec<Vec<Edge>>,
}

impl GraphProvider for DanglingProvider {
    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn outbound_edges(&self, vertex: usize) -> &[Edge] {
        &self.edges[vertex]
    }
}

#[test]
fn test_out_of_range_edges_are_ignored() {
    let provider = DanglingProvider {
        edges: vec![
            vec![Edge { dst: 7, weight: 1 }, Edge { dst: 1, weight: 4 }],
            vec![Edge {
                dst: usize::MAX,
                weight: 2,
            }],
        ],
    };

    let result = dijkstra_shortest_paths(&provider, 0).unwrap();
    assert_eq!(result.vertex_count(), 2);
    assert_eq!(result.distance(0), Some(0));
    assert_eq!(result.distance(1), Some(4));
}
