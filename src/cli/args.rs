use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Graph file: vertex count, then `src dst weight` triples
    pub graph_file: PathBuf,

    /// Source vertex (default from config, otherwise 0)
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Treat every edge as bidirectional
    #[arg(long)]
    pub undirected: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LadderArgs {
    /// Start word (default from config, otherwise "cat")
    #[arg(requires = "end")]
    pub begin: Option<String>,

    /// End word, must be in the dictionary (default from config, otherwise "dog")
    pub end: Option<String>,

    /// Dictionary file of whitespace separated words
    #[arg(long, short)]
    pub dictionary: Option<PathBuf>,
}
