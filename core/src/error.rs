use std::{fmt, io, path::PathBuf};

/// A maze that cannot be searched. Raised before any search starts.
#[derive(Debug)]
pub enum MazeError {
    Io { path: PathBuf, source: io::Error },
    Empty,
    EmptyRow { row: usize },
    RaggedRows { row: usize, expected: usize, found: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
    MissingStart,
    MissingGoal,
    DuplicateMarker { row: usize, count: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Io { path, source } => {
                write!(f, "Could not read maze file {}: {}", path.display(), source)
            }
            MazeError::Empty => write!(f, "Maze is empty"),
            MazeError::EmptyRow { row } => write!(f, "Maze row {} has no cells", row),
            MazeError::RaggedRows { row, expected, found } => write!(
                f,
                "Maze row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            MazeError::UnknownSymbol { row, col, symbol } => write!(
                f,
                "Unknown symbol '{}' at row {}, column {}",
                symbol, row, col
            ),
            MazeError::MissingStart => {
                write!(f, "Could not locate the start marker '-' in the first row")
            }
            MazeError::MissingGoal => {
                write!(f, "Could not locate the goal marker '-' in the last row")
            }
            MazeError::DuplicateMarker { row, count } => write!(
                f,
                "Row {} has {} '-' markers, expected exactly one",
                row, count
            ),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
