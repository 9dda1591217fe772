use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Traversal strategy selector for [`crate::find_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "dfs")]
    DepthFirst,
    #[default]
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    /// Menu order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::AStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::AStar => "astar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "Depth First Search",
            Algorithm::BreadthFirst => "Breadth First Search",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::DepthFirst)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "dfs" | "depth-first" | "depth_first" => Ok(Algorithm::DepthFirst),
            "2" | "bfs" | "breadth-first" | "breadth_first" => Ok(Algorithm::BreadthFirst),
            "3" | "astar" | "a*" | "a-star" | "a_star" => Ok(Algorithm::AStar),
            _ => Err(format!(
                "Unknown algorithm '{}', expected one of: dfs, bfs, astar (or 1, 2, 3)",
                s.trim()
            )),
        }
    }
}
