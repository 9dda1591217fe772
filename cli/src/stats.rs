use mazepath_core::{Algorithm, SearchResult};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// One statistics line. The step figure counts path cells, endpoints included.
pub fn format_stats_line(
    timestamp: u64,
    result: &SearchResult,
    algorithm: Algorithm,
    maze_name: &str,
) -> String {
    let outcome = if result.is_found() {
        format!("Path found with {} steps", result.path_len())
    } else {
        "No path found".to_string()
    };

    format!(
        "{}: {} in {:.4} seconds. With {} nodes explored. Using {}. Using {}",
        timestamp,
        outcome,
        result.elapsed_secs(),
        result.expansions,
        algorithm.display_name(),
        maze_name
    )
}

/// Appends `line` to the statistics file, creating it on first use.
pub fn append_stats_line(stats_path: &Path, line: &str) -> io::Result<()> {
    let mut stats_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(stats_path)?;
    writeln!(stats_file, "{}", line)
}
