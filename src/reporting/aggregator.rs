use log::debug;
use serde::Serialize;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use crate::core::types::{CheckOutcome, LinkRecord};
use crate::discovery::index::LinkIndex;
use crate::reporting::logging;

/// Which outcomes the aggregator emits and keeps for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Failures only
    #[default]
    Failures,
    /// Every outcome, success or failure
    Verbose,
}

impl ReportMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose { Self::Verbose } else { Self::Failures }
    }

    fn includes(self, outcome: &CheckOutcome) -> bool {
        match self {
            Self::Failures => outcome.is_failure(),
            Self::Verbose => true,
        }
    }
}

/// One outcome as observed by the aggregator, labelled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedOutcome {
    pub title: String,
    pub url: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Counters mutated while checks complete.
#[derive(Debug)]
struct RunStatistics {
    total_links: AtomicUsize,
    completed_links: AtomicUsize,
    failed_links: AtomicUsize,
    created: Instant,
    /// Set when dispatch begins; `created` stands in until then
    started: OnceLock<Instant>,
}

impl RunStatistics {
    fn new() -> Self {
        Self {
            total_links: AtomicUsize::new(0),
            completed_links: AtomicUsize::new(0),
            failed_links: AtomicUsize::new(0),
            created: Instant::now(),
            started: OnceLock::new(),
        }
    }

    fn total_links(&self) -> usize {
        self.total_links.load(Ordering::SeqCst)
    }

    fn completed_links(&self) -> usize {
        self.completed_links.load(Ordering::SeqCst)
    }

    fn failed_links(&self) -> usize {
        self.failed_links.load(Ordering::SeqCst)
    }

    fn elapsed(&self) -> Duration {
        self.started.get().unwrap_or(&self.created).elapsed()
    }
}

/// Final, read-only summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub failed: usize,
    pub verified: usize,
    pub elapsed_secs: f64,
    /// Emitted outcomes in completion order
    pub outcomes: Vec<ObservedOutcome>,
}

impl RunReport {
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_secs)
    }
}

pub type OutcomeListener = Box<dyn Fn(&ObservedOutcome) + Send + Sync>;

/// Collects outcomes from the worker pool.
///
/// The clock starts at `start_dispatch` (or at creation if that is never
/// called). Fed through `&self` from any number of callers, and consumed
/// once by `finish`.
pub struct Aggregator {
    stats: RunStatistics,
    mode: ReportMode,
    index: Option<LinkIndex>,
    listener: Option<OutcomeListener>,
    observed: Mutex<Vec<ObservedOutcome>>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("stats", &self.stats)
            .field("mode", &self.mode)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            stats: RunStatistics::new(),
            mode: ReportMode::default(),
            index: None,
            listener: None,
            observed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Label outcomes with the titles of `index` instead of the record's own.
    pub fn with_index(mut self, index: LinkIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Called with every emitted outcome, in completion order.
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&ObservedOutcome) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Start the elapsed clock. Only the first call counts.
    pub fn start_dispatch(&self) {
        self.stats.started.get_or_init(Instant::now);
    }

    pub fn record_dispatch(&self) {
        self.stats.total_links.fetch_add(1, Ordering::SeqCst);
    }

    pub fn observe(&self, record: LinkRecord, outcome: CheckOutcome) {
        self.stats.completed_links.fetch_add(1, Ordering::SeqCst);
        if outcome.is_failure() {
            self.stats.failed_links.fetch_add(1, Ordering::SeqCst);
        }
        logging::log_link_result(&record.url, &outcome);

        if !self.mode.includes(&outcome) {
            return;
        }

        let title = match self.index.as_ref().and_then(|index| index.title(&record.url)) {
            Some(title) => title.to_string(),
            None => record.title,
        };
        let observed = ObservedOutcome {
            title,
            url: record.url,
            outcome,
        };

        if let Some(listener) = &self.listener {
            listener(&observed);
        }
        self.observed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observed);
    }

    pub fn finish(self) -> RunReport {
        let elapsed = self.stats.elapsed();
        let total = self.stats.total_links();
        let failed = self.stats.failed_links();
        let completed = self.stats.completed_links();

        if completed != total {
            debug!("{completed} outcome(s) observed for {total} dispatched link(s)");
        }

        RunReport {
            total,
            failed,
            verified: total.saturating_sub(failed),
            elapsed_secs: elapsed.as_secs_f64(),
            outcomes: self
                .observed
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }
}
