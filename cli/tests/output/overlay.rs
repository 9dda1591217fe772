use super::{corner_walls_maze, split_maze};
use mazepath::overlay::{render_overlay, write_overlay};
use mazepath_core::{Algorithm, solve};

#[test]
fn test_overlay_marks_path_cells() {
    let maze = corner_walls_maze();
    let result = solve(&maze, Algorithm::BreadthFirst);

    let overlay = render_overlay(&maze.grid, &result);

    assert_eq!(overlay, "* * # \n. * * \n# . * \n");
}

#[test]
fn test_overlay_without_path_is_the_plain_maze() {
    let maze = split_maze();
    let result = solve(&maze, Algorithm::AStar);

    let overlay = render_overlay(&maze.grid, &result);

    assert_eq!(overlay, "- . # . . \n. . # . . \n. . # . - \n");
}

#[test]
fn test_write_overlay_file() {
    let dir = tempfile::tempdir().unwrap();
    let overlay_path = dir.path().join("Depth First Searchmaze.txt.txt");
    let maze = corner_walls_maze();
    let result = solve(&maze, Algorithm::DepthFirst);

    write_overlay(&overlay_path, &maze.grid, &result).unwrap();

    let written = std::fs::read_to_string(&overlay_path).unwrap();
    assert_eq!(written, "* . # \n* * . \n# * * \n");
}
