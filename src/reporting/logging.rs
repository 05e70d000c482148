use crate::config::Config;
use crate::core::types::CheckOutcome;
use log::{debug, error, info, warn};
use std::time::Duration;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = log_level(verbose, quiet);

    // `try_init` so embedding callers and tests can initialize twice
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Quiet wins over verbose; without either the console report is the only output
fn log_level(verbose: bool, quiet: bool) -> log::LevelFilter {
    match (verbose, quiet) {
        (_, true) => log::LevelFilter::Off,
        (true, false) => log::LevelFilter::Debug,
        (false, false) => log::LevelFilter::Off,
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config
        .timeout
        .map_or_else(|| "none".to_string(), |t| format!("{t}s"));

    info!(
        "Configuration: concurrency={}, timeout={timeout}, head_requests={}",
        config.concurrency_limit(),
        config.use_head_requests.unwrap_or(false)
    );
    info!("User-Agent: {}", config.user_agent());
    info!("Skipped schemes: {}", config.skip_schemes().join(", "));
}

/// Log link extraction information
pub fn log_extraction(file: &str, extracted: usize, dispatchable: usize) {
    info!("Extracted {extracted} link(s) from {file}");
    if dispatchable < extracted {
        info!(
            "Skipping {} link(s) with non-checkable schemes",
            extracted - dispatchable
        );
    }
}

/// Log the start of the checking phase
pub fn log_check_start(link_count: usize, concurrency: usize) {
    info!("Starting check of {link_count} link(s), {concurrency} at a time");
}

/// Log individual link results for debugging
pub fn log_link_result(url: &str, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Success => debug!("✓ {url}"),
        CheckOutcome::Failure { reason } => debug!("✗ {url} -> {reason}"),
    }
}

/// Log completion of the checking phase
pub fn log_check_complete(total: usize, failed: usize, elapsed: Duration) {
    let ms = elapsed.as_millis();
    if failed == 0 {
        info!("✅ Check complete: {total}/{total} links reachable ({ms}ms)");
    } else {
        warn!(
            "❌ Check complete: {}/{} links reachable, {} failed ({}ms)",
            reachable(total, failed),
            total,
            failed,
            ms
        );
    }
}

fn reachable(total: usize, failed: usize) -> usize {
    total.saturating_sub(failed)
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true, false), LevelFilter::Debug);
        assert_eq!(log_level(false, false), LevelFilter::Off);
        assert_eq!(log_level(false, true), LevelFilter::Off);
        assert_eq!(log_level(true, true), LevelFilter::Off);
    }

    #[test]
    fn test_reachable__saturates() {
        assert_eq!(reachable(7, 0), 7);
        assert_eq!(reachable(7, 3), 4);
        assert_eq!(reachable(1, 2), 0);
    }

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        log_check_complete(1, 2, Duration::ZERO);
    }
}
