//! The sweep driver: one blocking solver invocation per tuple, in order.

use std::path::Path;
use std::time::{Duration, Instant};

use wavebench_core::constants::SEQUENTIAL_THREADS;
use wavebench_core::scraper::parse_elapsed;
use wavebench_core::{
    ParseFailurePolicy, ResultSet, RunParameters, RunResult, Scraper, SweepError, SweepKind,
};

use crate::config::SweepConfig;
use crate::interfaces::SweepObserver;
use crate::invoker::SolverInvoker;
use crate::report::ReportWriter;

/// What a finished sweep produced.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub kind: SweepKind,
    /// Accepted results, in invocation order.
    pub results: ResultSet,
    /// Tuples for which the solver was launched.
    pub attempted: usize,
    /// Tuples whose solver exited unsuccessfully.
    pub failed: usize,
    /// Tuples whose solver succeeded without printing the marker.
    pub unmatched: usize,
    /// Marker lines dropped under [`ParseFailurePolicy::Skip`].
    pub parse_skipped: usize,
    /// Wall-clock time of the whole sweep.
    pub elapsed: Duration,
}

impl SweepOutcome {
    /// An empty outcome for a sweep of `kind`.
    #[must_use]
    pub fn new(kind: SweepKind) -> Self {
        Self {
            kind,
            results: ResultSet::new(),
            attempted: 0,
            failed: 0,
            unmatched: 0,
            parse_skipped: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Expand the sweep lists into tuples.
///
/// Parallel sweeps vary thread count slowest. Sequential sweeps ignore
/// `thread_values` and run every size with one thread.
#[must_use]
pub fn generate_parameters(
    kind: SweepKind,
    thread_values: &[u32],
    n_values: &[u64],
) -> Vec<RunParameters> {
    match kind {
        SweepKind::Sequential => n_values
            .iter()
            .map(|&n| RunParameters::new(SEQUENTIAL_THREADS, n))
            .collect(),
        SweepKind::Parallel => thread_values
            .iter()
            .flat_map(|&threads| n_values.iter().map(move |&n| RunParameters::new(threads, n)))
            .collect(),
    }
}

fn report_error(path: &Path) -> impl FnOnce(std::io::Error) -> SweepError + '_ {
    move |source| SweepError::Report {
        path: path.to_path_buf(),
        source,
    }
}

/// Run every tuple of `config`, writing accepted results to the report as
/// they arrive.
///
/// A solver that exits unsuccessfully is reported to the observer and
/// skipped. An unparseable marker line ends the sweep with
/// [`SweepError::Parse`] unless the policy is [`ParseFailurePolicy::Skip`].
/// Lines already written stay in the report either way.
pub fn run_sweep(
    config: &SweepConfig,
    invoker: &dyn SolverInvoker,
    observer: &dyn SweepObserver,
) -> Result<SweepOutcome, SweepError> {
    config.validate()?;

    let kind = config.kind;
    let tuples = generate_parameters(kind, &config.thread_values, &config.n_values);
    let scraper = Scraper::new(config.marker.clone(), config.match_mode);
    let mut report = ReportWriter::create(&config.output).map_err(report_error(&config.output))?;

    let start = Instant::now();
    let mut outcome = SweepOutcome::new(kind);
    let runs = config.run_count();
    tracing::info!(%kind, runs, output = %config.output.display(), "starting sweep");
    observer.on_sweep_start(kind, runs);

    for params in &tuples {
        observer.on_run_start(kind, params);
        outcome.attempted += 1;

        let invocation = invoker.invoke(kind, params)?;
        if !invocation.success() {
            tracing::warn!(%params, exit_code = ?invocation.exit_code, "solver failed");
            outcome.failed += 1;
            observer.on_run_failed(kind, params, &invocation.stderr);
            continue;
        }

        let mut matched = false;
        for line in scraper.matching_lines(&invocation.stdout) {
            matched = true;
            match parse_elapsed(line) {
                Ok(elapsed_secs) => {
                    let result = RunResult::new(*params, elapsed_secs);
                    report
                        .append(&result)
                        .map_err(report_error(&config.output))?;
                    tracing::info!(%params, elapsed_secs, "run complete");
                    observer.on_run_complete(kind, &result);
                    outcome.results.push(result);
                }
                Err(source) => match config.parse_failure {
                    ParseFailurePolicy::Abort => {
                        tracing::error!(%params, line, "unparseable solver output, aborting");
                        return Err(SweepError::Parse {
                            params: *params,
                            line: line.to_string(),
                            source,
                        });
                    }
                    ParseFailurePolicy::Skip => {
                        tracing::warn!(%params, line, error = %source, "skipping unparseable line");
                        outcome.parse_skipped += 1;
                        observer.on_parse_skipped(kind, params, line, &source);
                    }
                },
            }
        }

        if !matched {
            tracing::debug!(%params, marker = scraper.marker(), "no marker line in solver output");
            outcome.unmatched += 1;
            observer.on_no_match(kind, params);
        }
    }

    report.finish().map_err(report_error(&config.output))?;
    outcome.elapsed = start.elapsed();
    tracing::info!(
        accepted = outcome.results.len(),
        failed = outcome.failed,
        elapsed = ?outcome.elapsed,
        "sweep complete"
    );
    observer.on_sweep_complete(&outcome);
    Ok(outcome)
}
