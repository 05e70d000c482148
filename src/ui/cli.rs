// Command-line interface definitions and parsing for bookmarks-checker

use crate::config::CliConfig;
use crate::core::constants::{defaults, output_formats};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bookmarks file to check
    #[arg(
        short = 'f',
        long,
        value_name = "FILE",
        default_value = defaults::BOOKMARKS_FILE,
        help_heading = "Core Options"
    )]
    pub file: String,

    /// Concurrent requests (default: 16)
    #[arg(short = 'c', long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Request timeout in seconds (default: none)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    // Network
    /// Use HEAD requests instead of GET
    #[arg(long, help_heading = "Network")]
    pub head: bool,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Print every link checked, not only failures
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        concurrency: cli.concurrency,
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        use_head_requests: cli.head,
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
