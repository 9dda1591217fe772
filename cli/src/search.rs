use mazepath_core::{Algorithm, Maze, SearchResult, solve};

use crate::args::Args;

pub struct SearchRequest {
    pub algorithms: Vec<Algorithm>,
    pub maze_name: String,
    pub search_args: Args,
}

pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub maze_name: String,
}

pub fn create_search_request(
    args: Args,
    maze_name: String,
    chosen_algorithm: Algorithm,
) -> SearchRequest {
    let algorithms = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![chosen_algorithm]
    };

    SearchRequest {
        algorithms,
        maze_name,
        search_args: args,
    }
}

/// Runs each requested strategy in turn against the same borrowed maze.
pub fn execute_search(request: &SearchRequest, maze: &Maze) -> Vec<SearchOutcome> {
    request
        .algorithms
        .iter()
        .map(|&algorithm| SearchOutcome {
            algorithm,
            result: solve(maze, algorithm),
            maze_name: request.maze_name.clone(),
        })
        .collect()
}
