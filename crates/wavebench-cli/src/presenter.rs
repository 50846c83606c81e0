//! CLI sweep presenter.

use wavebench_core::{RunParameters, RunResult, ScrapeError, SweepKind};
use wavebench_orchestration::{SweepObserver, SweepOutcome};

use crate::output::{
    breakdown_line, completion_line, failure_line, no_match_line, progress_line, skipped_line,
    summary_line,
};
use crate::ui::{print_error, print_header, print_success, print_warning};

/// Prints progress lines as the sweep runs.
///
/// Quiet mode keeps only error and warning lines. Verbose mode adds warnings
/// for runs that printed no timing line and a breakdown at the end.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn shows_progress(&self) -> bool {
        !self.quiet
    }

    fn shows_diagnostics(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Warning text for a run without a timing line, when it should be shown.
    fn no_match_warning(&self, kind: SweepKind, params: &RunParameters) -> Option<String> {
        self.shows_diagnostics().then(|| no_match_line(kind, params))
    }

    /// Closing lines: the summary, then the breakdown in verbose mode.
    fn closing_lines(&self, outcome: &SweepOutcome) -> (Option<String>, Option<String>) {
        if !self.shows_progress() {
            return (None, None);
        }
        let breakdown = if self.shows_diagnostics() {
            breakdown_line(outcome)
        } else {
            None
        };
        (Some(summary_line(outcome)), breakdown)
    }
}

impl SweepObserver for CliPresenter {
    fn on_sweep_start(&self, kind: SweepKind, runs: usize) {
        if self.shows_progress() {
            print_header(&format!("{kind} sweep, {runs} runs"));
        }
    }

    fn on_run_start(&self, _kind: SweepKind, params: &RunParameters) {
        if self.shows_progress() {
            println!("{}", progress_line(params));
        }
    }

    fn on_run_complete(&self, _kind: SweepKind, result: &RunResult) {
        if self.shows_progress() {
            println!("{}", completion_line(result));
        }
    }

    fn on_run_failed(&self, kind: SweepKind, params: &RunParameters, stderr: &str) {
        print_error(&failure_line(kind, params, stderr));
    }

    fn on_no_match(&self, kind: SweepKind, params: &RunParameters) {
        if let Some(text) = self.no_match_warning(kind, params) {
            print_warning(&text);
        }
    }

    fn on_parse_skipped(
        &self,
        kind: SweepKind,
        params: &RunParameters,
        line: &str,
        error: &ScrapeError,
    ) {
        print_warning(&skipped_line(kind, params, line, error));
    }

    fn on_sweep_complete(&self, outcome: &SweepOutcome) {
        let (summary, breakdown) = self.closing_lines(outcome);
        if let Some(summary) = summary {
            print_success(&summary);
        }
        if let Some(breakdown) = breakdown {
            println!("{breakdown}");
        }
    }
}
