//! Link reachability checking
//!
//! This module holds the HTTP checker and the bounded worker pool
//! that runs it across every extracted link.

pub mod checker;
pub mod pool;

use std::sync::Arc;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::LinkRecord;
use crate::reporting::aggregator::{Aggregator, RunReport};
use crate::reporting::logging;

// Re-export commonly used items
pub use checker::{CheckLink, HttpChecker, classify_status};
pub use pool::{ActivePool, WorkerPool};

/// Check `records` over HTTP with the configured limits and finish the report.
pub async fn check_records(
    records: Vec<LinkRecord>,
    config: &Config,
    aggregator: Aggregator,
) -> Result<RunReport> {
    let checker: Arc<dyn CheckLink> = Arc::new(HttpChecker::new(config)?);
    let pool = WorkerPool::new(config.concurrency_limit());

    logging::log_check_start(records.len(), pool.concurrency());
    pool.run(records, checker, &aggregator).await;

    let report = aggregator.finish();
    logging::log_check_complete(report.total, report.failed, report.elapsed());
    Ok(report)
}
