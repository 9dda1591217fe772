use crate::grid::Cell;
use rustc_hash::FxHashMap;

pub type ParentMap = FxHashMap<Cell, Cell>;

/// Walks parent links from `goal` back to `start` and returns the route
/// start to goal inclusive.
///
/// # Panics
///
/// Panics if the parent chain is broken. That only happens when the frontier
/// or visited bookkeeping is wrong, never for an unreachable goal.
pub fn reconstruct_path(parent_map: &ParentMap, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current_cell = goal;

    while current_cell != start {
        let Some(&parent_cell) = parent_map.get(&current_cell) else {
            panic!(
                "parent chain broken: {} has no parent on the way from {} to {}",
                current_cell, goal, start
            );
        };
        if path.len() > parent_map.len() {
            panic!(
                "parent chain from {} loops without reaching {}",
                goal, start
            );
        }
        path.push(parent_cell);
        current_cell = parent_cell;
    }

    path.reverse();
    path
}
