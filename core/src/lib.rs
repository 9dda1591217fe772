pub mod algorithm;
pub mod benchmark;
pub mod error;
pub mod grid;
pub mod parsing;
pub mod pathfinding;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::MazeError;
pub use grid::{Cell, Direction, Grid, Symbol};
pub use parsing::{Maze, read_maze_file};
pub use pathfinding::{
    SearchResult, astar_find_path, bfs_find_path, dfs_find_path, find_path, reconstruct_path,
    solve,
};
