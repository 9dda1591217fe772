use mazepath_core::benchmark::{format_benchmark_table, run_strategy_benchmark, serpentine_maze};
use mazepath_core::read_maze_file;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pass a maze file to benchmark it instead of the generated switchback maze
    let maze = match std::env::args().nth(1) {
        Some(maze_file) => read_maze_file(Path::new(&maze_file))?,
        None => serpentine_maze(301, 301)?,
    };

    println!(
        "🚀 Benchmarking strategies on a {}x{} maze...\n",
        maze.grid.width(),
        maze.grid.height()
    );

    let results = run_strategy_benchmark(&maze, 5);
    print!("{}", format_benchmark_table(&results));

    println!("\n✅ Benchmark completed!");
    println!("- BFS and A* report the same path length; DFS may be longer");
    println!("- A* should expand no more cells than BFS on open mazes");

    Ok(())
}
