//! `graphwalk paths`: shortest path from a source to every reachable vertex

mod human;
mod json;
mod records;

use serde::Serialize;
use tracing::debug;

use crate::cli::{OutputFormat, PathsArgs};
use crate::commands::dispatch::CommandContext;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{
    dijkstra_shortest_paths, extract_path, load_graph, Distance, DistanceResult, LoadOptions,
};

/// One reachable vertex with its cost and reconstructed path
#[derive(Debug, Clone, Serialize)]
pub struct PathEntry {
    pub destination: usize,
    pub cost: Distance,
    pub path: Vec<usize>,
}

/// Build one entry per reachable vertex, in ascending vertex order
pub fn collect_entries(result: &DistanceResult) -> Vec<PathEntry> {
    result
        .reachable()
        .map(|(destination, cost)| PathEntry {
            destination,
            cost,
            path: extract_path(result, destination),
        })
        .collect()
}

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let source = args.source.unwrap_or(ctx.config.paths.source);
    let opts = LoadOptions {
        undirected: args.undirected || ctx.config.paths.undirected,
    };

    let graph = load_graph(&args.graph_file, opts)?;
    debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    let result = dijkstra_shortest_paths(&graph, source)?;
    debug!(elapsed = ?ctx.start.elapsed(), "dijkstra");

    let entries = collect_entries(&result);

    match ctx.cli.format {
        OutputFormat::Human => human::output_paths(&entries),
        OutputFormat::Json => json::output_paths(&graph, &result, &entries)?,
        OutputFormat::Records => records::output_paths(&graph, &result, &entries),
    }

    Ok(())
}
