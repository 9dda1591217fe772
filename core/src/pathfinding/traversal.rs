use super::admission::Admission;
use super::frontier::Frontier;
use super::instrumentation::Instrumentation;
use super::result::SearchResult;
use super::utils::{ParentMap, reconstruct_path};
use crate::algorithm::Algorithm;
use crate::grid::{Cell, Grid};
use tracing::{debug, trace};

/// Shared traversal skeleton. The frontier discipline and the admission
/// policy are the only things that differ between strategies.
pub struct Traversal<'g, F, A> {
    grid: &'g Grid,
    frontier: F,
    admission: A,
    parent_map: ParentMap,
}

impl<'g, F: Frontier, A: Admission> Traversal<'g, F, A> {
    pub fn new(grid: &'g Grid, frontier: F, admission: A) -> Self {
        Self {
            grid,
            frontier,
            admission,
            parent_map: ParentMap::default(),
        }
    }

    pub fn run(mut self, start: Cell, goal: Cell, algorithm: Algorithm) -> SearchResult {
        let mut instrumentation = Instrumentation::start();
        debug!(algorithm = algorithm.as_str(), %start, %goal, "search started");

        let start_priority = self.admission.seed(start, goal);
        self.frontier.push(start, start_priority);

        while let Some(current_cell) = self.frontier.pop() {
            if !self.admission.should_expand(current_cell) {
                continue;
            }
            instrumentation.record_expansion();
            trace!(
                cell = %current_cell,
                expansions = instrumentation.expansions(),
                frontier = self.frontier.len(),
                "expanding"
            );

            if current_cell == goal {
                let measurement = instrumentation.stop();
                let path = reconstruct_path(&self.parent_map, start, goal);
                debug!(
                    algorithm = algorithm.as_str(),
                    expansions = measurement.expansions,
                    path_len = path.len(),
                    elapsed_secs = measurement.elapsed.as_secs_f64(),
                    "path found"
                );
                return SearchResult::new(Some(path), measurement, self.admission.into_visited());
            }

            self.expand(current_cell, goal);
        }

        let measurement = instrumentation.stop();
        debug!(
            algorithm = algorithm.as_str(),
            expansions = measurement.expansions,
            elapsed_secs = measurement.elapsed.as_secs_f64(),
            "frontier exhausted, no path"
        );
        SearchResult::new(None, measurement, self.admission.into_visited())
    }

    fn expand(&mut self, current_cell: Cell, goal: Cell) {
        let grid = self.grid;
        for neighbor in grid.neighbors(current_cell) {
            if let Some(priority) = self.admission.admit(neighbor, current_cell, goal) {
                self.parent_map.insert(neighbor, current_cell);
                self.frontier.push(neighbor, priority);
            }
        }
    }
}
