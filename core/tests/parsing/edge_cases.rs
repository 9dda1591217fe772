use mazepath_core::{Cell, Maze, MazeError, Symbol};

#[test]
fn test_parse_spaced_tokens() {
    let maze: Maze = "- . #\n. . .\n# . -".parse().unwrap();

    assert_eq!(maze.grid.height(), 3);
    assert_eq!(maze.grid.width(), 3);
    assert_eq!(maze.start, Cell::new(0, 0));
    assert_eq!(maze.goal, Cell::new(2, 2));
    assert_eq!(maze.grid.symbol(Cell::new(0, 2)), Some(Symbol::Wall));
    assert_eq!(maze.grid.symbol(Cell::new(1, 1)), Some(Symbol::Open));
}

#[test]
fn test_parse_unspaced_rows_match_spaced_rows() {
    let spaced: Maze = "# - #\n. . .\n# - #".parse().unwrap();
    let compact: Maze = "#-#\n...\n#-#".parse().unwrap();

    assert_eq!(spaced, compact);
}

#[test]
fn test_blank_lines_are_skipped() {
    let maze: Maze = "\n- . #\n\n   \n# . -\n\n".parse().unwrap();

    assert_eq!(maze.grid.height(), 2);
    assert_eq!(maze.goal, Cell::new(1, 2));
}

#[test]
fn test_markers_outside_first_and_last_row_are_open_cells() {
    let maze: Maze = "- .\n- -\n. -".parse().unwrap();

    assert_eq!(maze.start, Cell::new(0, 0));
    assert_eq!(maze.goal, Cell::new(2, 1));
    assert!(maze.grid.is_passable(Cell::new(1, 0)));
}

#[test]
fn test_empty_text_is_rejected() {
    assert!(matches!("".parse::<Maze>(), Err(MazeError::Empty)));
    assert!(matches!("\n  \n".parse::<Maze>(), Err(MazeError::Empty)));
}

#[test]
fn test_ragged_rows_are_rejected() {
    let result = "- . #\n. .\n# . -".parse::<Maze>();

    assert!(matches!(
        result,
        Err(MazeError::RaggedRows { row: 1, expected: 3, found: 2 })
    ));
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let result = "- . #\n. x .\n# . -".parse::<Maze>();

    assert!(matches!(
        result,
        Err(MazeError::UnknownSymbol { row: 1, col: 1, symbol: 'x' })
    ));
}

#[test]
fn test_missing_start_is_rejected() {
    assert!(matches!(
        ". . #\n. . .\n# . -".parse::<Maze>(),
        Err(MazeError::MissingStart)
    ));
}

#[test]
fn test_missing_goal_is_rejected() {
    assert!(matches!(
        "- . #\n. . .\n# . .".parse::<Maze>(),
        Err(MazeError::MissingGoal)
    ));
}

#[test]
fn test_duplicate_start_marker_is_rejected() {
    assert!(matches!(
        "- - #\n. . .\n# . -".parse::<Maze>(),
        Err(MazeError::DuplicateMarker { row: 0, count: 2 })
    ));
}

#[test]
fn test_single_row_maze_uses_first_and_last_marker() {
    let maze: Maze = "- . . -".parse().unwrap();

    assert_eq!(maze.start, Cell::new(0, 0));
    assert_eq!(maze.goal, Cell::new(0, 3));
}

#[test]
fn test_single_marker_maze_starts_on_the_goal() {
    let maze: Maze = ". - .".parse().unwrap();

    assert_eq!(maze.start, Cell::new(0, 1));
    assert_eq!(maze.goal, maze.start);
}

#[test]
fn test_single_row_with_three_markers_is_rejected() {
    assert!(matches!(
        "- - -".parse::<Maze>(),
        Err(MazeError::DuplicateMarker { row: 0, count: 3 })
    ));
}

#[test]
fn test_error_messages_name_the_problem() {
    let ragged = "- .\n.\n. -".parse::<Maze>().unwrap_err();
    assert_eq!(
        ragged.to_string(),
        "Maze row 1 has 1 cells, expected 2 like the first row"
    );

    let missing = ". .\n. -".parse::<Maze>().unwrap_err();
    assert!(missing.to_string().contains("start marker"));
}
