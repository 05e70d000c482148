/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - the classic failure listing and summary block
    pub const TEXT: &str = "text";
    /// JSON output format - structured report for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// Lowest status code classified as a client error
    pub const CLIENT_ERROR_MIN: u16 = 400;
    /// HTTP 405 Method Not Allowed - some servers reject HEAD
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    /// HTTP 501 Not Implemented - some servers reject HEAD
    pub const NOT_IMPLEMENTED: u16 = 501;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Maximum reasonable timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Decimal places of the elapsed time in the summary block
    pub const ELAPSED_PRECISION: usize = 5;
}

/// Default configuration values
pub mod defaults {
    /// Bookmarks file looked up when no path is given
    pub const BOOKMARKS_FILE: &str = "bookmarks.html";
    /// Maximum number of checks in flight
    pub const CONCURRENCY: usize = 16;
    /// Upper bound accepted for the concurrency limit
    pub const MAX_CONCURRENCY: usize = 1000;
    /// Client signature sent with every request
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:64.0) Gecko/20100101 Firefox/64.0";
    /// Schemes found in browser exports that cannot be checked over HTTP
    pub const SKIP_SCHEMES: [&str; 2] = ["file", "place"];
    /// Configuration file name searched for in the working directory
    pub const CONFIG_FILE: &str = ".bookmarks-checker.toml";
    /// Number of parent directories searched for a configuration file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Error message constants
pub mod error_messages {
    /// Reason recorded when a check panics instead of returning an outcome
    pub const UNEXPECTED_FAILURE: &str = "unexpected failure";
}
