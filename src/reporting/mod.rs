//! Result aggregation and reporting
//!
//! This module collects check outcomes into run statistics and
//! handles structured logging for the application.

pub mod aggregator;
pub mod logging;

// Re-export commonly used items
pub use aggregator::{Aggregator, ObservedOutcome, ReportMode, RunReport};
