use super::instrumentation::Measurement;
use crate::grid::Cell;
use rustc_hash::FxHashSet;
use std::time::Duration;

/// Everything a search hands back to its caller.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Start to goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<Cell>>,
    pub expansions: usize,
    pub elapsed: Duration,
    pub visited: FxHashSet<Cell>,
}

impl SearchResult {
    pub(crate) fn new(
        path: Option<Vec<Cell>>,
        measurement: Measurement,
        visited: FxHashSet<Cell>,
    ) -> Self {
        Self {
            path,
            expansions: measurement.expansions,
            elapsed: measurement.elapsed,
            visited,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, endpoints included.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Number of moves along the path.
    pub fn step_count(&self) -> usize {
        self.path_len().saturating_sub(1)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn contains_path_cell(&self, cell: Cell) -> bool {
        self.path
            .as_ref()
            .is_some_and(|path| path.contains(&cell))
    }

    pub fn path_cells(&self) -> FxHashSet<Cell> {
        self.path
            .iter()
            .flatten()
            .copied()
            .collect()
    }
}
