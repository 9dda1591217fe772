use super::admission::CostAdmission;
use super::frontier::PriorityFrontier;
use super::result::SearchResult;
use super::traversal::Traversal;
use crate::algorithm::Algorithm;
use crate::grid::{Cell, Grid};

/// A* guided by Manhattan distance. Optimal on a 4-connected unit-cost grid.
pub fn astar_find_path(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
    Traversal::new(grid, PriorityFrontier::new(goal), CostAdmission::default()).run(
        start,
        goal,
        Algorithm::AStar,
    )
}
