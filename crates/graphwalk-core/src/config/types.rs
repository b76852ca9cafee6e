//! Configuration type definitions

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Shortest path settings
    #[serde(default)]
    pub paths: PathsConfig,

    /// Word ladder settings
    #[serde(default)]
    pub ladder: LadderConfig,
}

/// Settings for the `paths` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Source vertex for shortest path queries
    #[serde(default)]
    pub source: usize,

    /// Treat every edge in the graph file as bidirectional
    #[serde(default)]
    pub undirected: bool,
}

/// Settings for the `ladder` command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LadderConfig {
    /// Dictionary file, whitespace separated words
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    /// Start word used when none is given on the command line
    #[serde(default = "default_begin")]
    pub begin: String,

    /// End word used when none is given on the command line
    #[serde(default = "default_end")]
    pub end: String,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            begin: default_begin(),
            end: default_end(),
        }
    }
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_begin() -> String {
    "cat".to_string()
}

fn default_end() -> String {
    "dog".to_string()
}
