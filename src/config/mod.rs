//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{defaults, output_formats, timeouts};
use crate::core::error::{BookmarksError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of reachability checks in flight
    pub concurrency: Option<usize>,

    /// Timeout in seconds for each request; unset leaves the transport default
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    pub user_agent: Option<String>,

    /// Use HEAD requests instead of GET (falls back to GET on 405/501)
    pub use_head_requests: Option<bool>,

    /// URL schemes that are never dispatched
    pub skip_schemes: Option<Vec<String>>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Report every outcome instead of failures only
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: Some(defaults::CONCURRENCY),
            timeout: None, // No deadline beyond the network stack's own
            user_agent: Some(defaults::USER_AGENT.to_string()),
            use_head_requests: Some(false),
            skip_schemes: Some(defaults::SKIP_SCHEMES.iter().map(|s| s.to_string()).collect()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BookmarksError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            BookmarksError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE) {
            return config;
        }

        for i in 1..=defaults::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.use_head_requests {
            self.use_head_requests = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Concurrency limit, falling back to the default
    pub fn concurrency_limit(&self) -> usize {
        self.concurrency.unwrap_or(defaults::CONCURRENCY)
    }

    /// Get timeout as Duration, `None` when no timeout is configured
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(defaults::USER_AGENT)
    }

    pub fn skip_schemes(&self) -> Vec<String> {
        self.skip_schemes.clone().unwrap_or_else(|| {
            defaults::SKIP_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn is_json(&self) -> bool {
        self.output_format.as_deref() == Some(output_formats::JSON)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(BookmarksError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > defaults::MAX_CONCURRENCY {
                return Err(BookmarksError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(BookmarksError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(BookmarksError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(BookmarksError::Config(
                "User-Agent cannot be empty.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(BookmarksError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub concurrency: Option<usize>,    // --concurrency
    pub timeout: Option<u64>,          // --timeout
    pub user_agent: Option<String>,    // --user-agent
    pub use_head_requests: bool,       // --head
    pub output_format: Option<String>, // --format
    pub verbose: bool,                 // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
