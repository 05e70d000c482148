use futures::{StreamExt, stream};
use log::{debug, warn};
use rustc_hash::FxHashMap;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::constants::error_messages;
use crate::core::types::{CheckOutcome, LinkRecord};
use crate::reporting::aggregator::Aggregator;
use crate::validation::checker::CheckLink;

/// Bookkeeping of the checks currently in flight.
///
/// Only the counter matters for the concurrency bound; the url set and the
/// peak are kept for diagnostics.
#[derive(Debug, Default)]
pub struct ActivePool {
    active: Mutex<FxHashMap<String, usize>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ActivePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a check as started, returning the number now in flight.
    pub fn activate(&self, url: &str) -> usize {
        {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            *active.entry(url.to_string()).or_insert(0) += 1;
        }
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);
        current
    }

    pub fn deactivate(&self, url: &str) {
        {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(count) = active.get_mut(url) {
                *count -= 1;
                if *count == 0 {
                    active.remove(url);
                }
            }
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of checks that were in flight at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Urls currently being checked, sorted.
    pub fn active_urls(&self) -> Vec<String> {
        let active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        let mut urls: Vec<String> = active.keys().cloned().collect();
        urls.sort();
        urls
    }
}

/// Runs a checker over every record with a fixed cap on checks in flight.
#[derive(Debug)]
pub struct WorkerPool {
    concurrency: usize,
    active: Arc<ActivePool>,
}

impl WorkerPool {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
            active: Arc::new(ActivePool::new()),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn active(&self) -> &ActivePool {
        &self.active
    }

    /// Check every record and hand each outcome to `aggregator` as it completes.
    ///
    /// Each check runs as its own task so a panicking checker only fails its
    /// own record. Always runs to completion.
    pub async fn run(
        &self,
        records: Vec<LinkRecord>,
        checker: Arc<dyn CheckLink>,
        aggregator: &Aggregator,
    ) {
        debug!(
            "Dispatching {} check(s), at most {} in flight",
            records.len(),
            self.concurrency
        );

        aggregator.start_dispatch();
        let mut outcomes = stream::iter(records)
            .map(|record| {
                aggregator.record_dispatch();
                let checker = Arc::clone(&checker);
                let active = Arc::clone(&self.active);
                let url = record.url.clone();

                let handle = tokio::spawn(async move {
                    let in_flight = active.activate(&url);
                    debug!("Checking {url} ({in_flight} in flight)");
                    // Decrement even if the check panics
                    let _guard = DeactivateOnDrop {
                        active: &active,
                        url: &url,
                    };
                    checker.check(&url).await
                });

                async move {
                    let outcome = match handle.await {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            warn!("Check of {} did not complete: {err}", record.url);
                            CheckOutcome::failure(format!(
                                "{}: {err}",
                                error_messages::UNEXPECTED_FAILURE
                            ))
                        }
                    };
                    (record, outcome)
                }
            })
            .buffer_unordered(self.concurrency);

        while let Some((record, outcome)) = outcomes.next().await {
            aggregator.observe(record, outcome);
        }
    }
}

struct DeactivateOnDrop<'a> {
    active: &'a ActivePool,
    url: &'a str,
}

impl Drop for DeactivateOnDrop<'_> {
    fn drop(&mut self) {
        self.active.deactivate(self.url);
    }
}
