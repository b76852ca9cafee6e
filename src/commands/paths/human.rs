use super::PathEntry;

/// Render an entry as the path line followed by its cost line
pub fn format_entry(entry: &PathEntry) -> String {
    let path: Vec<String> = entry.path.iter().map(|v| v.to_string()).collect();
    format!("{}\nTotal cost is {}", path.join(" "), entry.cost)
}

/// Output paths in human-readable format
pub fn output_paths(entries: &[PathEntry]) {
    for entry in entries {
        println!("{}", format_entry(entry));
    }
}
