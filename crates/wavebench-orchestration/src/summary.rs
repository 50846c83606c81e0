//! JSON summary of a finished sweep.

use std::path::{Path, PathBuf};

use serde::Serialize;
use wavebench_core::{RunResult, SweepError, SweepKind};

use crate::config::SweepConfig;
use crate::sweep::SweepOutcome;

/// Serialized form of a sweep outcome.
#[derive(Debug, Serialize)]
pub struct SweepSummary<'a> {
    pub kind: SweepKind,
    pub program: &'a str,
    pub program_args: &'a [String],
    pub marker: &'a str,
    pub report: &'a Path,
    pub attempted: usize,
    pub accepted: usize,
    pub failed: usize,
    pub unmatched: usize,
    pub parse_skipped: usize,
    pub elapsed_secs: f64,
    pub results: &'a [RunResult],
}

impl<'a> SweepSummary<'a> {
    #[must_use]
    pub fn new(config: &'a SweepConfig, outcome: &'a SweepOutcome) -> Self {
        Self {
            kind: outcome.kind,
            program: &config.program,
            program_args: &config.program_args,
            marker: &config.marker,
            report: &config.output,
            attempted: outcome.attempted,
            accepted: outcome.results.len(),
            failed: outcome.failed,
            unmatched: outcome.unmatched,
            parse_skipped: outcome.parse_skipped,
            elapsed_secs: outcome.elapsed.as_secs_f64(),
            results: outcome.results.as_slice(),
        }
    }
}

/// Write the summary as pretty JSON to `path`.
pub fn save_summary(
    config: &SweepConfig,
    outcome: &SweepOutcome,
    path: &Path,
) -> Result<(), SweepError> {
    let to_err = |source: std::io::Error| SweepError::Summary {
        path: PathBuf::from(path),
        source,
    };
    let content = serde_json::to_string_pretty(&SweepSummary::new(config, outcome))
        .map_err(std::io::Error::other)
        .map_err(to_err)?;
    std::fs::write(path, content).map_err(to_err)
}
