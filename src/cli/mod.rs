//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{LadderArgs, PathsArgs};
pub use graphwalk_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphwalk - shortest paths and word ladders
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-fatal messages such as ladder refusals
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging (timings for major phases)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphwalk_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ~/.config/graphwalk/config.toml)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shortest path and its cost to every reachable vertex
    Paths(PathsArgs),

    /// Find a shortest word ladder between two dictionary words
    Ladder(LadderArgs),
}
