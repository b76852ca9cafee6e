use super::PathEntry;
use graphwalk_core::graph::{DistanceResult, Graph};

/// Output paths in records format
pub fn output_paths(graph: &Graph, result: &DistanceResult, entries: &[PathEntry]) {
    println!(
        "H graphwalk=1 records=1 mode=paths source={} vertices={} edges={} reachable={}",
        result.source(),
        graph.vertex_count(),
        graph.edge_count(),
        entries.len()
    );

    for entry in entries {
        let path: Vec<String> = entry.path.iter().map(|v| v.to_string()).collect();
        println!(
            "P {} cost={} hops={} path={}",
            entry.destination,
            entry.cost,
            entry.path.len().saturating_sub(1),
            path.join(",")
        );
    }
}
