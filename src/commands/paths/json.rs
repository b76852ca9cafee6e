use super::PathEntry;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{DistanceResult, Graph};

/// Output paths in JSON format
pub fn output_paths(graph: &Graph, result: &DistanceResult, entries: &[PathEntry]) -> Result<()> {
    let unreachable: Vec<usize> = (0..result.vertex_count())
        .filter(|v| !result.is_reachable(*v))
        .collect();

    let output = serde_json::json!({
        "source": result.source(),
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "paths": entries,
        "unreachable": unreachable,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
