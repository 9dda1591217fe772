use mazepath_core::{Cell, Maze};
use std::path::Path;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchOutcome, SearchRequest};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, maze: &Maze, colors: &ColorScheme) {
    println!(
        "🧭 Solving {} ({} x {}) from {} to {}",
        colors.maze_name(&format!("\"{}\"", request.maze_name)),
        colors.number(&maze.grid.width().to_string()),
        colors.number(&maze.grid.height().to_string()),
        colors.coordinate(&maze.start.to_string()),
        colors.coordinate(&maze.goal.to_string())
    );

    for algorithm in &request.algorithms {
        println!("⚙️  Using {}", colors.algorithm(algorithm.display_name()));
    }

    println!("🔍 Searching...");
}

pub fn display_search_outcome(outcome: &SearchOutcome, display_options: &Args, colors: &ColorScheme) {
    let result = &outcome.result;

    if display_options.verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => {
            println!(
                "{} {}: path found with {} steps in {} seconds.",
                colors.success("✅"),
                colors.algorithm(outcome.algorithm.display_name()),
                colors.number(&path.len().to_string()),
                colors.number(&format!("{:.4}", result.elapsed_secs()))
            );
            if !display_options.quiet {
                println!(
                    "Explored {} nodes.",
                    colors.number(&format_number(result.expansions))
                );
            }
            if display_options.show_path {
                display_path(path, colors);
            }
        }
        None => {
            println!(
                "{} {} in {}",
                colors.error("❌ No path found with"),
                colors.algorithm(outcome.algorithm.display_name()),
                colors.maze_name(&format!("\"{}\"", outcome.maze_name))
            );
        }
    }

    if display_options.verbose {
        display_search_statistics(outcome, colors);
    }
}

fn display_path(path: &[Cell], colors: &ColorScheme) {
    println!();
    for (step_index, cell) in path.iter().enumerate() {
        let step_number = format!("{}.", step_index + 1);
        println!(
            "{:>4} {}",
            colors.step_number(&step_number),
            colors.coordinate(&cell.to_string())
        );
    }
}

fn display_search_statistics(outcome: &SearchOutcome, colors: &ColorScheme) {
    let result = &outcome.result;
    println!("\n---\n");
    println!(
        "{} Expanded {} cells, discovered {} in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(result.expansions)),
        colors.number(&format_number(result.visited.len())),
        colors.number(&format!("{:.3}", result.elapsed_secs()))
    );
    if result.is_found() && !outcome.algorithm.is_optimal() {
        println!("   (depth-first paths are not guaranteed to be shortest)");
    }
}

pub fn display_written_file(description: &str, file_path: &Path, colors: &ColorScheme) {
    println!(
        "💾 Wrote {} to {}",
        description,
        colors.file(&file_path.display().to_string())
    );
}
