pub mod admission;
pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod frontier;
pub mod instrumentation;
pub mod result;
pub mod traversal;
pub mod utils;

use crate::algorithm::Algorithm;
use crate::grid::{Cell, Grid};
use crate::parsing::Maze;

pub use astar::astar_find_path;
pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use result::SearchResult;
pub use utils::reconstruct_path;

/// Runs `algorithm` from `start` to `goal`. The grid is only borrowed, so the
/// same grid can serve any number of sequential searches.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell, algorithm: Algorithm) -> SearchResult {
    match algorithm {
        Algorithm::DepthFirst => dfs_find_path(grid, start, goal),
        Algorithm::BreadthFirst => bfs_find_path(grid, start, goal),
        Algorithm::AStar => astar_find_path(grid, start, goal),
    }
}

pub fn solve(maze: &Maze, algorithm: Algorithm) -> SearchResult {
    find_path(&maze.grid, maze.start, maze.goal, algorithm)
}
