use crate::algorithm::Algorithm;
use crate::error::MazeError;
use crate::grid::{Grid, Symbol};
use crate::parsing::Maze;
use crate::pathfinding::solve;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub path_found: bool,
    pub path_length: usize,
    pub expansions: usize,
    pub cells_visited: usize,
    pub average_time: Duration,
    pub fastest_time: Duration,
}

/// Builds a switchback maze: wall rows on every odd row, each with a single
/// gap that alternates between the right and left edge. The only route
/// snakes through every open row, which makes the strategies' exploration
/// differences easy to see.
pub fn serpentine_maze(width: usize, height: usize) -> Result<Maze, MazeError> {
    let width = width.max(2);
    let height = height.max(1);

    let mut rows = vec![vec![Symbol::Open; width]; height];
    for (row_index, row) in rows.iter_mut().enumerate().filter(|(r, _)| r % 2 == 1) {
        row.fill(Symbol::Wall);
        let gap = if row_index % 4 == 1 { width - 1 } else { 0 };
        row[gap] = Symbol::Open;
    }

    let last_row = height - 1;
    let goal_col = if last_row % 2 == 1 {
        if last_row % 4 == 1 { width - 1 } else { 0 }
    } else if (last_row / 2) % 2 == 1 {
        0
    } else {
        width - 1
    };
    rows[0][0] = Symbol::Marker;
    rows[last_row][goal_col] = Symbol::Marker;

    Maze::new(Grid::new(rows)?)
}

pub fn run_strategy_benchmark(maze: &Maze, rounds: u32) -> Vec<BenchmarkResult> {
    let rounds = rounds.max(1);

    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut total_time = Duration::ZERO;
            let mut fastest_time = Duration::MAX;
            let mut last_result = solve(maze, algorithm);

            for round in 0..rounds {
                if round > 0 {
                    last_result = solve(maze, algorithm);
                }
                total_time += last_result.elapsed;
                fastest_time = fastest_time.min(last_result.elapsed);
            }

            BenchmarkResult {
                algorithm,
                path_found: last_result.is_found(),
                path_length: last_result.path_len(),
                expansions: last_result.expansions,
                cells_visited: last_result.visited.len(),
                average_time: total_time / rounds,
                fastest_time,
            }
        })
        .collect()
}

/// Renders the results as a fixed-width table, one row per strategy.
pub fn format_benchmark_table(results: &[BenchmarkResult]) -> String {
    let mut table = format!(
        "{:<22} {:>6} {:>10} {:>12} {:>10} {:>12} {:>12}\n",
        "Algorithm", "Found", "Path", "Expansions", "Visited", "Avg (ms)", "Best (ms)"
    );
    for result in results {
        table.push_str(&format!(
            "{:<22} {:>6} {:>10} {:>12} {:>10} {:>12.3} {:>12.3}\n",
            result.algorithm.display_name(),
            if result.path_found { "yes" } else { "no" },
            result.path_length,
            result.expansions,
            result.cells_visited,
            result.average_time.as_secs_f64() * 1000.0,
            result.fastest_time.as_secs_f64() * 1000.0,
        ));
    }
    table
}
