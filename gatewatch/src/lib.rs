pub mod commands;
pub mod handlers;

// Re-export commonly used handler helpers for convenience
pub use commands::Command;
pub use handlers::{AppState, decode_url_lines, parse_url_argument, parse_url_line};
