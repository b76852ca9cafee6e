use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample graph: 0 -5-> 1, 0 -3-> 2, 2 -1-> 1, 1 -2-> 3; vertex 4 isolated
#[allow(dead_code)]
pub const SAMPLE_GRAPH: &str = "5\n0 1 5\n0 2 3\n2 1 1\n1 3 2\n";

/// Dictionary holding the cat-cot-cog-dog chain plus distractors
#[allow(dead_code)]
pub const SAMPLE_WORDS: &str = "cat cot cog dog\nbat bag zebra\n";

/// Get a Command for graphwalk, isolated from the caller's config and log
/// environment and running inside `dir`
pub fn graphwalk(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.current_dir(dir)
        .env("GRAPHWALK_CONFIG_DIR", dir.join("config"))
        .env_remove("GRAPHWALK_CONFIG")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Temp directory with `graph.txt` and `words.txt` fixtures
#[allow(dead_code)]
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);
    write_file(dir.path(), "words.txt", SAMPLE_WORDS);
    dir
}
