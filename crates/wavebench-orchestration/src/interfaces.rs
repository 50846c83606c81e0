//! Sweep observer interface.

use wavebench_core::{RunParameters, RunResult, ScrapeError, SweepKind};

use crate::sweep::SweepOutcome;

/// Receives sweep progress as it happens.
///
/// All methods default to doing nothing so implementors pick what they need.
pub trait SweepObserver {
    /// Called once before the first invocation.
    fn on_sweep_start(&self, _kind: SweepKind, _runs: usize) {}

    /// Called before each invocation.
    fn on_run_start(&self, _kind: SweepKind, _params: &RunParameters) {}

    /// Called for every accepted result.
    fn on_run_complete(&self, _kind: SweepKind, _result: &RunResult) {}

    /// Called when the solver exits unsuccessfully.
    fn on_run_failed(&self, _kind: SweepKind, _params: &RunParameters, _stderr: &str) {}

    /// Called when the solver succeeded but printed no marker line.
    fn on_no_match(&self, _kind: SweepKind, _params: &RunParameters) {}

    /// Called when a marker line was skipped under the skip policy.
    fn on_parse_skipped(
        &self,
        _kind: SweepKind,
        _params: &RunParameters,
        _line: &str,
        _error: &ScrapeError,
    ) {
    }

    /// Called once after the last invocation.
    fn on_sweep_complete(&self, _outcome: &SweepOutcome) {}
}

/// Observer that ignores every event.
pub struct NullObserver;

impl SweepObserver for NullObserver {}
