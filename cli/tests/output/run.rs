use clap::Parser;
use mazepath::Args;
use mazepath::app::{ERROR_EXIT_STATUS, RunOutcome, resolve_algorithm, run};
use mazepath::colors::ColorScheme;
use mazepath_core::Algorithm;
use std::fs;
use std::io::Cursor;
use std::path::Path;

const SPLIT_MAZE: &str = "- . # . .\n. . # . .\n. . # . -\n";
const CORNER_MAZE: &str = "- . #\n. . .\n# . -\n";

fn run_args(dir: &Path, maze_file: &str, extra: &[&str]) -> Args {
    let maze_path = dir.join(maze_file);
    let output_dir = dir.to_str().unwrap().to_string();
    let stats_file = dir.join("statistics.txt").to_str().unwrap().to_string();

    let mut argv = vec![
        "mazepath".to_string(),
        maze_path.to_str().unwrap().to_string(),
        "-o".to_string(),
        output_dir,
        "--stats-file".to_string(),
        stats_file,
        "--no-color".to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_exit_statuses_distinguish_no_path_from_errors() {
    assert_eq!(RunOutcome::PathFound.exit_status(), 0);
    assert_eq!(RunOutcome::NoPath.exit_status(), 2);
    assert_eq!(ERROR_EXIT_STATUS, 1);
}

#[test]
fn test_unreachable_goal_skips_overlay_but_writes_image() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("split.txt"), SPLIT_MAZE).unwrap();
    let args = run_args(dir.path(), "split.txt", &["-a", "bfs", "--files"]);

    let outcome = run(args, &ColorScheme::new(false)).unwrap();

    assert_eq!(outcome, RunOutcome::NoPath);
    assert!(!dir.path().join("Breadth First Searchsplit.txt.txt").exists());
    assert!(dir.path().join("Breadth First Searchsplit.txt.png").exists());
    let stats = fs::read_to_string(dir.path().join("statistics.txt")).unwrap();
    assert_eq!(stats.lines().count(), 1);
    assert!(stats.contains("No path found in "));
    assert!(stats.ends_with("Using Breadth First Search. Using split.txt\n"));
}

#[test]
fn test_found_path_writes_overlay_and_image() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("maze.txt"), CORNER_MAZE).unwrap();
    let args = run_args(dir.path(), "maze.txt", &["-a", "dfs", "--files", "-q"]);

    let outcome = run(args, &ColorScheme::new(false)).unwrap();

    assert_eq!(outcome, RunOutcome::PathFound);
    let overlay =
        fs::read_to_string(dir.path().join("Depth First Searchmaze.txt.txt")).unwrap();
    assert_eq!(overlay, "* . # \n* * . \n# * * \n");
    assert!(dir.path().join("Depth First Searchmaze.txt.png").exists());
}

#[test]
fn test_json_all_logs_one_line_per_strategy() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("maze.txt"), CORNER_MAZE).unwrap();
    let args = run_args(dir.path(), "maze.txt", &["--json", "--all"]);

    let outcome = run(args, &ColorScheme::new(false)).unwrap();

    assert_eq!(outcome, RunOutcome::PathFound);
    let stats = fs::read_to_string(dir.path().join("statistics.txt")).unwrap();
    let lines: Vec<&str> = stats.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("Using Depth First Search. Using maze.txt"));
    assert!(lines[1].ends_with("Using Breadth First Search. Using maze.txt"));
    assert!(lines[2].ends_with("Using A* Search. Using maze.txt"));
    // No output files without --overlay, --image or --files
    assert!(!dir.path().join("A* Searchmaze.txt.png").exists());
}

#[test]
fn test_no_stats_leaves_statistics_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("maze.txt"), CORNER_MAZE).unwrap();
    let args = run_args(dir.path(), "maze.txt", &["-a", "astar", "--no-stats", "-q"]);

    run(args, &ColorScheme::new(false)).unwrap();

    assert!(!dir.path().join("statistics.txt").exists());
}

#[test]
fn test_missing_maze_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = run_args(dir.path(), "absent.txt", &["-a", "bfs"]);

    let error = run(args, &ColorScheme::new(false)).unwrap_err();

    assert!(error.to_string().contains("Maze file does not exist"));
    assert!(!dir.path().join("statistics.txt").exists());
}

#[test]
fn test_malformed_maze_is_an_error_before_searching() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ragged.txt"), "- . .\n. .\n. . -\n").unwrap();
    let args = run_args(dir.path(), "ragged.txt", &["-a", "bfs"]);

    let error = run(args, &ColorScheme::new(false)).unwrap_err();

    assert!(error.to_string().contains("expected 3"));
    assert!(!dir.path().join("statistics.txt").exists());
}

#[test]
fn test_explicit_algorithm_skips_the_menu() {
    let args = Args::try_parse_from(["mazepath", "maze.txt", "-a", "astar"]).unwrap();
    let mut output = Vec::<u8>::new();

    let algorithm = resolve_algorithm(&args, true, &mut Cursor::new("1\n"), &mut output).unwrap();

    assert_eq!(algorithm, Algorithm::AStar);
    assert!(output.is_empty());
}

#[test]
fn test_non_interactive_input_falls_back_to_breadth_first() {
    let args = Args::try_parse_from(["mazepath", "maze.txt"]).unwrap();
    let mut output = Vec::<u8>::new();

    let algorithm = resolve_algorithm(&args, false, &mut Cursor::new("1\n"), &mut output).unwrap();

    assert_eq!(algorithm, Algorithm::BreadthFirst);
    assert!(output.is_empty());
}

#[test]
fn test_all_falls_back_to_breadth_first_without_prompting() {
    let args = Args::try_parse_from(["mazepath", "maze.txt", "--all"]).unwrap();
    let mut output = Vec::<u8>::new();

    let algorithm = resolve_algorithm(&args, true, &mut Cursor::new("1\n"), &mut output).unwrap();

    assert_eq!(algorithm, Algorithm::BreadthFirst);
    assert!(output.is_empty());
}

#[test]
fn test_interactive_input_uses_the_menu() {
    let args = Args::try_parse_from(["mazepath", "maze.txt"]).unwrap();
    let mut output = Vec::<u8>::new();

    let algorithm = resolve_algorithm(&args, true, &mut Cursor::new("1\n"), &mut output).unwrap();

    assert_eq!(algorithm, Algorithm::DepthFirst);
    assert!(String::from_utf8(output).unwrap().contains("Choose Algorithm: "));
}
