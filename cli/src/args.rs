use clap::Parser;
use mazepath_core::Algorithm;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "mazepath")]
#[command(about = "Find a route through a grid maze with depth-first, breadth-first or A* search")]
pub struct Args {
    /// Maze file to solve (prompted for when omitted)
    pub maze_file: Option<PathBuf>,

    /// Search strategy: dfs, bfs, astar (or 1, 2, 3)
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<Algorithm>,

    /// Run every strategy on the same maze
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,

    /// Directory for the overlay and image files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write the maze with the path marked as a text file
    #[arg(long)]
    pub overlay: bool,

    /// Write a PNG with walls, visited cells and the path
    #[arg(long)]
    pub image: bool,

    /// Write both the text overlay and the PNG
    #[arg(long)]
    pub files: bool,

    /// File that collects one statistics line per run
    #[arg(long, value_name = "PATH", default_value = "statistics.txt")]
    pub stats_file: PathBuf,

    /// Do not append to the statistics file
    #[arg(long)]
    pub no_stats: bool,

    /// Print the path as a list of coordinates
    #[arg(short = 'p', long)]
    pub show_path: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show maze info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the outcome line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn write_overlay(&self) -> bool {
        self.overlay || self.files
    }

    pub fn write_image(&self) -> bool {
        self.image || self.files
    }
}
