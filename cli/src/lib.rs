pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod image_output;
pub mod json_output;
pub mod overlay;
pub mod prompt;
pub mod search;
pub mod stats;
pub mod utils;

// Re-export commonly used items
pub use args::Args;
pub use utils::format_number;
