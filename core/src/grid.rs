use crate::error::MazeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent cell in `direction`, or `None` when it would fall above
    /// row 0 or left of column 0.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let cell = match direction {
            Direction::Up => Cell::new(self.row.checked_sub(1)?, self.col),
            Direction::Right => Cell::new(self.row, self.col.checked_add(1)?),
            Direction::Down => Cell::new(self.row.checked_add(1)?, self.col),
            Direction::Left => Cell::new(self.row, self.col.checked_sub(1)?),
        };
        Some(cell)
    }

    /// `|Δrow| + |Δcol|`. Admissible and consistent on a 4-connected unit-cost grid.
    pub fn manhattan_distance(self, other: Cell) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Enumeration order for neighbors. Depth-first branch preference depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Open,
    Wall,
    Marker,
}

impl Symbol {
    pub const OPEN: char = '.';
    pub const WALL: char = '#';
    pub const MARKER: char = '-';

    pub fn from_char(symbol: char) -> Option<Symbol> {
        match symbol {
            Self::OPEN => Some(Symbol::Open),
            Self::WALL => Some(Symbol::Wall),
            Self::MARKER => Some(Symbol::Marker),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Open => Self::OPEN,
            Symbol::Wall => Self::WALL,
            Symbol::Marker => Self::MARKER,
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, Symbol::Wall)
    }
}

/// Immutable rectangular view over the maze cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Symbol>>) -> Result<Self, MazeError> {
        let width = rows.first().ok_or(MazeError::Empty)?.len();
        if width == 0 {
            return Err(MazeError::EmptyRow { row: 0 });
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(MazeError::EmptyRow { row: row_index });
            }
            if row.len() != width {
                return Err(MazeError::RaggedRows {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        Ok(Self { rows, width })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    pub fn symbol(&self, cell: Cell) -> Option<Symbol> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.rows
            .get(cell.row)
            .is_some_and(|row| cell.col < row.len())
    }

    pub fn is_passable(&self, cell: Cell) -> bool {
        self.symbol(cell).is_some_and(Symbol::is_passable)
    }

    /// Passable orthogonal neighbors of `cell` in up, right, down, left order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| cell.step(direction))
            .filter(move |neighbor| self.is_passable(*neighbor))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, Symbol)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(move |(col_index, &symbol)| (Cell::new(row_index, col_index), symbol))
        })
    }
}
