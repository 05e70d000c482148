//! Console rendering of a run.

use crate::core::constants::timeouts;
use crate::core::error::{BookmarksError, Result};
use crate::core::types::CheckOutcome;
use crate::reporting::aggregator::{ObservedOutcome, ReportMode, RunReport};

/// Lines printed before dispatch.
pub fn check_header(link_count: usize, mode: ReportMode) -> String {
    let mut header = format!("\n {link_count} links being checked ...\n");
    if mode == ReportMode::Failures {
        header.push_str("\n failures:\n");
    }
    header
}

/// One outcome as `title | url [ -- reason ]`.
pub fn outcome_line(observed: &ObservedOutcome, mode: ReportMode) -> String {
    let ObservedOutcome {
        title,
        url,
        outcome,
    } = observed;

    match (mode, outcome) {
        (ReportMode::Failures, CheckOutcome::Failure { reason }) => {
            format!("\t {title}  |  {url} -- {reason}")
        }
        (ReportMode::Failures, CheckOutcome::Success) => format!("\t {title}  |  {url}"),
        (ReportMode::Verbose, CheckOutcome::Success) => format!(" ok: {title}  |  {url}"),
        (ReportMode::Verbose, CheckOutcome::Failure { reason }) => {
            format!(" F:  {title}  |  {url} -- {reason}")
        }
    }
}

/// Closing block with counts and elapsed time.
pub fn summary(report: &RunReport) -> String {
    format!(
        "\n {} links failed\n {} links verified\n\n URL parse time: {:.prec$} secs\n",
        report.failed,
        report.verified,
        report.elapsed_secs,
        prec = timeouts::ELAPSED_PRECISION
    )
}

pub fn json_report(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| BookmarksError::Io(e.into()))
}
