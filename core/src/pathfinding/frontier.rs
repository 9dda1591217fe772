use crate::grid::Cell;
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

/// Ordered container of discovered but not yet expanded cells.
///
/// `priority` is the estimated total cost through the cell. Only
/// [`PriorityFrontier`] looks at it; the stack and queue disciplines
/// order purely by insertion.
pub trait Frontier {
    fn push(&mut self, cell: Cell, priority: u32);
    fn pop(&mut self) -> Option<Cell>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Cell>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, cell: Cell, _priority: u32) {
        self.stack.push(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Cell>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, cell: Cell, _priority: u32) {
        self.queue.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug, Clone)]
struct FrontierNode {
    priority: u32,
    heuristic: u32,
    cell: Cell,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key: BinaryHeap is a max-heap.
        // Ties on priority prefer the cell closer to the goal, then lower row, then lower column.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.cell.row.cmp(&self.cell.row))
            .then_with(|| other.cell.col.cmp(&self.cell.col))
    }
}

/// Min-heap on priority with a deterministic tie-break. Drives A*.
#[derive(Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierNode>,
    goal: Cell,
}

impl PriorityFrontier {
    pub fn new(goal: Cell) -> Self {
        Self {
            heap: BinaryHeap::new(),
            goal,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, cell: Cell, priority: u32) {
        self.heap.push(FrontierNode {
            priority,
            heuristic: cell.manhattan_distance(self.goal),
            cell,
        });
    }

    fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|node| node.cell)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
