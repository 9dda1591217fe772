use crate::error::MazeError;
use crate::grid::{Cell, Grid, Symbol};
use std::{path::Path, str::FromStr};

/// A validated grid together with its start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

impl Maze {
    pub fn new(grid: Grid) -> Result<Self, MazeError> {
        let (start, goal) = find_start_and_goal(&grid)?;
        Ok(Self { grid, start, goal })
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Maze::new(parse_grid(text)?)
    }
}

pub fn read_maze_file(maze_path: &Path) -> Result<Maze, MazeError> {
    let text = std::fs::read_to_string(maze_path).map_err(|source| MazeError::Io {
        path: maze_path.to_path_buf(),
        source,
    })?;
    text.parse()
}

/// Parses maze text into a grid. Blank lines are skipped and whitespace
/// between symbols is optional, so `- . #` and `-.#` describe the same row.
pub fn parse_grid(text: &str) -> Result<Grid, MazeError> {
    let rows = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row_index, line)| parse_row(row_index, line))
        .collect::<Result<Vec<_>, _>>()?;

    Grid::new(rows)
}

fn parse_row(row_index: usize, line: &str) -> Result<Vec<Symbol>, MazeError> {
    line.split_whitespace()
        .flat_map(str::chars)
        .enumerate()
        .map(|(col_index, symbol)| {
            Symbol::from_char(symbol).ok_or(MazeError::UnknownSymbol {
                row: row_index,
                col: col_index,
                symbol,
            })
        })
        .collect()
}

/// Start is the marker in the first row, goal the marker in the last row.
/// A single-row maze carries both: start is its first marker, goal its last.
pub fn find_start_and_goal(grid: &Grid) -> Result<(Cell, Cell), MazeError> {
    let last_row = grid.height() - 1;
    let first_markers = marker_columns(grid, 0);

    if last_row == 0 {
        return match first_markers.as_slice() {
            [] => Err(MazeError::MissingStart),
            [only] => Ok((Cell::new(0, *only), Cell::new(0, *only))),
            [first, last] => Ok((Cell::new(0, *first), Cell::new(0, *last))),
            _ => Err(MazeError::DuplicateMarker {
                row: 0,
                count: first_markers.len(),
            }),
        };
    }

    let start_col = single_marker(&first_markers, 0, MazeError::MissingStart)?;
    let goal_col = single_marker(
        &marker_columns(grid, last_row),
        last_row,
        MazeError::MissingGoal,
    )?;

    Ok((Cell::new(0, start_col), Cell::new(last_row, goal_col)))
}

fn marker_columns(grid: &Grid, row: usize) -> Vec<usize> {
    grid.rows()[row]
        .iter()
        .enumerate()
        .filter(|(_, symbol)| **symbol == Symbol::Marker)
        .map(|(col, _)| col)
        .collect()
}

fn single_marker(columns: &[usize], row: usize, missing: MazeError) -> Result<usize, MazeError> {
    match columns {
        [] => Err(missing),
        [col] => Ok(*col),
        _ => Err(MazeError::DuplicateMarker {
            row,
            count: columns.len(),
        }),
    }
}
