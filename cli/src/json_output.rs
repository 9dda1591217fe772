use mazepath_core::{Algorithm, SearchResult};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub maze: String,
    pub algorithm: Algorithm,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<[usize; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: f64,
    pub nodes_explored: usize,
    pub cells_visited: usize,
}

pub fn create_json_output(
    result: &SearchResult,
    algorithm: Algorithm,
    maze_name: &str,
) -> JsonOutput {
    let json_path = result
        .path
        .as_ref()
        .map(|path| path.iter().map(|cell| [cell.row, cell.col]).collect());

    JsonOutput {
        query: JsonQuery {
            maze: maze_name.to_string(),
            algorithm,
        },
        result: JsonResult {
            found: result.is_found(),
            path: json_path,
            steps: result.is_found().then(|| result.step_count()),
        },
        stats: JsonStats {
            search_time_ms: result.elapsed_secs() * 1000.0,
            nodes_explored: result.expansions,
            cells_visited: result.visited.len(),
        },
    }
}

pub fn print_json_output(json_outputs: &[JsonOutput]) {
    let serialized = match json_outputs {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };

    match serialized {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
