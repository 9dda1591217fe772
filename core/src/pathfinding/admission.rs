use crate::grid::Cell;
use rustc_hash::{FxHashMap, FxHashSet};

/// Decides which discovered neighbors enter the frontier, and with what priority.
///
/// Cells are marked on discovery: whatever an admission policy accepts counts
/// as visited from that moment on.
pub trait Admission {
    /// Registers the start cell and returns its frontier priority.
    fn seed(&mut self, start: Cell, goal: Cell) -> u32;

    /// Returns the priority to push `neighbor` with, or `None` to reject it.
    fn admit(&mut self, neighbor: Cell, current: Cell, goal: Cell) -> Option<u32>;

    /// Whether a popped cell should be expanded. Rejects stale duplicates.
    fn should_expand(&mut self, _cell: Cell) -> bool {
        true
    }

    fn into_visited(self) -> FxHashSet<Cell>;
}

/// Visited membership is the sole admission test. Used by depth-first and
/// breadth-first search, so every cell is pushed at most once.
#[derive(Debug, Default)]
pub struct VisitedAdmission {
    visited: FxHashSet<Cell>,
}

impl Admission for VisitedAdmission {
    fn seed(&mut self, start: Cell, _goal: Cell) -> u32 {
        self.visited.insert(start);
        0
    }

    fn admit(&mut self, neighbor: Cell, _current: Cell, _goal: Cell) -> Option<u32> {
        self.visited.insert(neighbor).then_some(0)
    }

    fn into_visited(self) -> FxHashSet<Cell> {
        self.visited
    }
}

/// Cost-based admission for A*. A neighbor is (re)admitted whenever the path
/// through the current cell is cheaper than any recorded so far.
#[derive(Debug, Default)]
pub struct CostAdmission {
    cost_map: FxHashMap<Cell, u32>,
    closed: FxHashSet<Cell>,
}

impl CostAdmission {
    pub fn cost(&self, cell: Cell) -> Option<u32> {
        self.cost_map.get(&cell).copied()
    }
}

impl Admission for CostAdmission {
    fn seed(&mut self, start: Cell, goal: Cell) -> u32 {
        self.cost_map.insert(start, 0);
        start.manhattan_distance(goal)
    }

    fn admit(&mut self, neighbor: Cell, current: Cell, goal: Cell) -> Option<u32> {
        let current_cost = self.cost_map.get(&current).copied()?;
        // Every edge has unit weight.
        let new_cost = current_cost + 1;

        if let Some(&existing_cost) = self.cost_map.get(&neighbor) {
            if new_cost >= existing_cost {
                return None;
            }
        }

        self.cost_map.insert(neighbor, new_cost);
        Some(new_cost + neighbor.manhattan_distance(goal))
    }

    fn should_expand(&mut self, cell: Cell) -> bool {
        self.closed.insert(cell)
    }

    fn into_visited(self) -> FxHashSet<Cell> {
        self.cost_map.into_keys().collect()
    }
}
