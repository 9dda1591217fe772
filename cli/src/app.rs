use mazepath_core::{Algorithm, Maze, read_maze_file};
use std::{
    error::Error,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};
use tracing::{info, warn};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::display::{display_search_info, display_search_outcome, display_written_file};
use crate::image_output::write_image;
use crate::json_output::{create_json_output, print_json_output};
use crate::overlay::write_overlay;
use crate::prompt::{prompt_algorithm, prompt_maze_file};
use crate::search::{SearchOutcome, create_search_request, execute_search};
use crate::stats::{append_stats_line, format_stats_line, unix_timestamp};
use crate::utils::output_stem;

/// Process exit status for a run that failed with an error.
pub const ERROR_EXIT_STATUS: u8 = 1;

/// How a completed run ended. Errors are reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every requested search reached the goal.
    PathFound,
    /// At least one requested search exhausted its frontier.
    NoPath,
}

impl RunOutcome {
    pub fn exit_status(self) -> u8 {
        match self {
            RunOutcome::PathFound => 0,
            RunOutcome::NoPath => 2,
        }
    }
}

pub struct MazePathApp {
    pub maze_path: PathBuf,
    pub maze_name: String,
}

impl MazePathApp {
    pub fn new(maze_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !maze_path.exists() {
            return Err(format!("Maze file does not exist: {:?}", maze_path).into());
        }

        let maze_name = maze_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| format!("Maze path has no file name: {:?}", maze_path))?;

        Ok(Self {
            maze_path,
            maze_name,
        })
    }

    /// Reads and validates the maze. Malformed mazes fail here, before any search.
    pub fn load_maze(&self) -> Result<Maze, Box<dyn Error>> {
        let maze = read_maze_file(&self.maze_path)?;
        info!(
            maze = %self.maze_name,
            width = maze.grid.width(),
            height = maze.grid.height(),
            start = %maze.start,
            goal = %maze.goal,
            "maze loaded"
        );
        Ok(maze)
    }
}

/// Loads the maze, runs every requested search, reports and writes the run files.
pub fn run(search_args: Args, colors: &ColorScheme) -> Result<RunOutcome, Box<dyn Error>> {
    let maze_path = resolve_maze_path(&search_args)?;
    let app = MazePathApp::new(maze_path)?;
    let maze = app.load_maze()?;

    let algorithm = resolve_algorithm(
        &search_args,
        io::stdin().is_terminal(),
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;
    let search_request = create_search_request(search_args, app.maze_name.clone(), algorithm);
    let args = &search_request.search_args;

    if args.verbose && !args.json {
        display_search_info(&search_request, &maze, colors);
    }

    let outcomes = execute_search(&search_request, &maze);

    if args.json {
        let json_outputs: Vec<_> = outcomes
            .iter()
            .map(|outcome| create_json_output(&outcome.result, outcome.algorithm, &outcome.maze_name))
            .collect();
        print_json_output(&json_outputs);
    } else {
        for outcome in &outcomes {
            display_search_outcome(outcome, args, colors);
        }
    }

    for outcome in &outcomes {
        write_run_files(outcome, &maze, args, colors)?;
    }

    if outcomes.iter().all(|outcome| outcome.result.is_found()) {
        Ok(RunOutcome::PathFound)
    } else {
        Ok(RunOutcome::NoPath)
    }
}

fn resolve_maze_path(args: &Args) -> Result<PathBuf, Box<dyn Error>> {
    match &args.maze_file {
        Some(maze_file) => Ok(maze_file.clone()),
        None => Ok(prompt_maze_file(&mut io::stdin().lock(), &mut io::stdout())?),
    }
}

/// The explicit `--algorithm` wins. `--all` and non-interactive input fall back
/// to the default strategy, otherwise the menu is shown.
pub fn resolve_algorithm<R: BufRead, W: Write>(
    args: &Args,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Algorithm, Box<dyn Error>> {
    if let Some(algorithm) = args.algorithm {
        return Ok(algorithm);
    }
    if args.all || !interactive {
        return Ok(Algorithm::default());
    }
    prompt_algorithm(input, output)
}

/// Appends the statistics line and writes the requested overlay and image.
/// The overlay needs a path; the image is written either way.
pub fn write_run_files(
    outcome: &SearchOutcome,
    maze: &Maze,
    args: &Args,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    let result = &outcome.result;
    let stem = output_stem(outcome.algorithm.display_name(), &outcome.maze_name);
    let announce = !args.json && !args.quiet;

    if !args.no_stats {
        let line = format_stats_line(unix_timestamp(), result, outcome.algorithm, &outcome.maze_name);
        append_stats_line(&args.stats_file, &line)?;
        info!(stats_file = %args.stats_file.display(), "statistics line appended");
    }

    if args.write_overlay() {
        if result.is_found() {
            let overlay_path = args.output_dir.join(format!("{}.txt", stem));
            write_overlay(&overlay_path, &maze.grid, result)?;
            if announce {
                display_written_file("text overlay", &overlay_path, colors);
            }
        } else {
            warn!(algorithm = outcome.algorithm.as_str(), "no path, skipping text overlay");
        }
    }

    if args.write_image() {
        let image_path = args.output_dir.join(format!("{}.png", stem));
        write_image(&image_path, &maze.grid, result)?;
        if announce {
            display_written_file("image", &image_path, colors);
        }
    }

    Ok(())
}
