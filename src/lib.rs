//! Verify the links of an exported browser bookmarks file.
//!
//! Anchors are extracted from the export line by line, checked
//! concurrently over HTTP with a bounded number of requests in flight,
//! and aggregated into a report of dead links.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use crate::core::{BookmarksError, CheckOutcome, LinkRecord, Result};
pub use discovery::{BookmarkExtractor, LinkExtractor, LinkIndex};
pub use reporting::{Aggregator, ReportMode, RunReport};
pub use validation::{CheckLink, HttpChecker, WorkerPool, check_records};
