//! User interface
//!
//! CLI parsing and console rendering of the report.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
