//! Graph file loading
//!
//! Format: a vertex count followed by `src dst weight` triples, all
//! whitespace separated. Lines starting with `#` are comments.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use crate::bail_graph;
use crate::error::{GraphwalkError, Result};
use crate::graph::types::{Graph, Weight};
use crate::trace_time;

/// Options controlling how edges are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Insert every edge in both directions
    pub undirected: bool,
}

/// A whitespace token and the 1-based line it came from
struct Token<'a> {
    line: usize,
    text: &'a str,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .flat_map(|(idx, line)| {
            line.split_whitespace()
                .map(move |text| Token { line: idx + 1, text })
        })
        .collect()
}

fn parse_index(token: &Token<'_>, what: &str) -> Result<usize> {
    match token.text.parse::<usize>() {
        Ok(value) => Ok(value),
        Err(_) => bail_graph!(token.line, "expected {} but found '{}'", what, token.text),
    }
}

fn parse_weight(token: &Token<'_>) -> Result<Weight> {
    if let Ok(value) = token.text.parse::<Weight>() {
        return Ok(value);
    }
    if token.text.parse::<i64>().is_ok_and(|v| v < 0) {
        bail_graph!(token.line, "negative weight {} is not supported", token.text);
    }
    bail_graph!(token.line, "expected edge weight but found '{}'", token.text)
}

/// Parse a graph from its textual description
pub fn parse_graph(text: &str, opts: LoadOptions) -> Result<Graph> {
    let tokens = tokenize(text);
    let Some((count_token, edge_tokens)) = tokens.split_first() else {
        bail_graph!(1, "missing vertex count");
    };

    let vertex_count = parse_index(count_token, "vertex count")?;
    let Some(mut graph) = Graph::try_new(vertex_count) else {
        bail_graph!(
            count_token.line,
            "vertex count {} is too large",
            vertex_count
        );
    };

    for triple in edge_tokens.chunks(3) {
        let [src, dst, weight] = triple else {
            bail_graph!(
                triple[0].line,
                "incomplete edge, expected 'src dst weight'"
            );
        };

        let src_idx = parse_index(src, "source vertex")?;
        let dst_idx = parse_index(dst, "destination vertex")?;
        let weight = parse_weight(weight)?;

        for (token, vertex) in [(src, src_idx), (dst, dst_idx)] {
            if vertex >= vertex_count {
                bail_graph!(
                    token.line,
                    "vertex {} out of range (graph has {} vertices)",
                    vertex,
                    vertex_count
                );
            }
        }

        if opts.undirected {
            graph.add_undirected_edge(src_idx, dst_idx, weight)?;
        } else {
            graph.add_edge(src_idx, dst_idx, weight)?;
        }
    }

    Ok(graph)
}

impl FromStr for Graph {
    type Err = GraphwalkError;

    /// Parse a directed graph
    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s, LoadOptions::default())
    }
}

/// Load a graph file from disk
#[tracing::instrument(skip_all, fields(path = %path.display(), undirected = opts.undirected))]
pub fn load_graph(path: &Path, opts: LoadOptions) -> Result<Graph> {
    let start = Instant::now();

    let text = fs::read_to_string(path)
        .map_err(|e| GraphwalkError::io_operation("open graph file", path.display(), e))?;
    let graph = parse_graph(&text, opts)?;

    trace_time!(
        start,
        "load_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    Ok(graph)
}
