//! Console line formatting.

use std::time::Duration;

use wavebench_core::{RunParameters, RunResult, ScrapeError, SweepKind};
use wavebench_orchestration::SweepOutcome;

/// Line printed before a solver is launched.
#[must_use]
pub fn progress_line(params: &RunParameters) -> String {
    format!(
        "Running with NUM_THREADS={} and N={}...",
        params.threads, params.n
    )
}

/// Line printed after a result is accepted.
#[must_use]
pub fn completion_line(result: &RunResult) -> String {
    format!(
        "Completed: NUM_THREADS={}, N={}, Time={:.6} seconds",
        result.threads, result.n, result.elapsed_secs
    )
}

/// Line printed when the solver exits unsuccessfully.
#[must_use]
pub fn failure_line(kind: SweepKind, params: &RunParameters, stderr: &str) -> String {
    format!("Error running {}: {}", params.describe(kind), stderr.trim_end())
}

/// Line printed when a successful run printed no timing line.
#[must_use]
pub fn no_match_line(kind: SweepKind, params: &RunParameters) -> String {
    format!("no timing line in solver output for {}", params.describe(kind))
}

/// Line printed when an unparseable timing line is skipped.
#[must_use]
pub fn skipped_line(
    kind: SweepKind,
    params: &RunParameters,
    line: &str,
    error: &ScrapeError,
) -> String {
    format!("skipping {}: {error} (line: {line:?})", params.describe(kind))
}

/// Closing line of a sweep.
#[must_use]
pub fn summary_line(outcome: &SweepOutcome) -> String {
    format!(
        "{} of {} runs recorded in {}",
        outcome.results.len(),
        outcome.attempted,
        format_duration(outcome.elapsed)
    )
}

/// Breakdown of the runs that produced nothing, if any did.
#[must_use]
pub fn breakdown_line(outcome: &SweepOutcome) -> Option<String> {
    if outcome.failed + outcome.unmatched + outcome.parse_skipped == 0 {
        return None;
    }
    Some(format!(
        "  failed: {}, no timing line: {}, unparseable: {}",
        outcome.failed, outcome.unmatched, outcome.parse_skipped
    ))
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    } else {
        let hours = (secs / 3600.0).floor() as u64;
        let mins = ((secs - hours as f64 * 3600.0) / 60.0).floor() as u64;
        format!("{hours}h{mins:02}m")
    }
}
