use super::admission::VisitedAdmission;
use super::frontier::FifoFrontier;
use super::result::SearchResult;
use super::traversal::Traversal;
use crate::algorithm::Algorithm;
use crate::grid::{Cell, Grid};

/// Breadth-first search. Returns a shortest path in edge count.
pub fn bfs_find_path(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
    Traversal::new(grid, FifoFrontier::default(), VisitedAdmission::default()).run(
        start,
        goal,
        Algorithm::BreadthFirst,
    )
}
