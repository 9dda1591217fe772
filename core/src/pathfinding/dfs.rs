use super::admission::VisitedAdmission;
use super::frontier::LifoFrontier;
use super::result::SearchResult;
use super::traversal::Traversal;
use crate::algorithm::Algorithm;
use crate::grid::{Cell, Grid};

/// Depth-first search. Finds a path when one exists, with no length guarantee.
///
/// Neighbors are pushed up, right, down, left, so the last one pushed (left)
/// is explored first.
pub fn dfs_find_path(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
    Traversal::new(grid, LifoFrontier::default(), VisitedAdmission::default()).run(
        start,
        goal,
        Algorithm::DepthFirst,
    )
}
