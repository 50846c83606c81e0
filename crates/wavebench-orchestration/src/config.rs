//! Sweep configuration with defaults for both drivers.

use std::path::PathBuf;

use wavebench_core::constants::{
    DEFAULT_N_VALUES, DEFAULT_PROGRAM, DEFAULT_THREAD_VALUES, PARALLEL_MARKER, PARALLEL_OUTPUT,
    PARALLEL_SOLVER, SEQUENTIAL_MARKER, SEQUENTIAL_OUTPUT, SEQUENTIAL_SOLVER, SEQUENTIAL_THREADS,
};
use wavebench_core::{MatchMode, ParseFailurePolicy, SweepError, SweepKind};

/// Everything a sweep needs, fixed before the first invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub kind: SweepKind,
    /// Program launched for every run.
    pub program: String,
    /// Fixed arguments placed before the per-run positional arguments.
    pub program_args: Vec<String>,
    /// Substring identifying the timing line in solver output.
    pub marker: String,
    /// Thread counts, outer loop. Always `[1]` for sequential sweeps.
    pub thread_values: Vec<u32>,
    /// Problem sizes, inner loop.
    pub n_values: Vec<u64>,
    /// Report file path.
    pub output: PathBuf,
    pub match_mode: MatchMode,
    pub parse_failure: ParseFailurePolicy,
}

impl SweepConfig {
    /// Defaults of the sequential driver.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            kind: SweepKind::Sequential,
            program: DEFAULT_PROGRAM.to_string(),
            program_args: vec![SEQUENTIAL_SOLVER.to_string()],
            marker: SEQUENTIAL_MARKER.to_string(),
            thread_values: vec![SEQUENTIAL_THREADS],
            n_values: DEFAULT_N_VALUES.to_vec(),
            output: PathBuf::from(SEQUENTIAL_OUTPUT),
            match_mode: MatchMode::default(),
            parse_failure: ParseFailurePolicy::default(),
        }
    }

    /// Defaults of the parallel driver.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            kind: SweepKind::Parallel,
            program: DEFAULT_PROGRAM.to_string(),
            program_args: vec![PARALLEL_SOLVER.to_string()],
            marker: PARALLEL_MARKER.to_string(),
            thread_values: DEFAULT_THREAD_VALUES.to_vec(),
            n_values: DEFAULT_N_VALUES.to_vec(),
            output: PathBuf::from(PARALLEL_OUTPUT),
            match_mode: MatchMode::default(),
            parse_failure: ParseFailurePolicy::default(),
        }
    }

    /// Defaults for the given kind.
    #[must_use]
    pub fn for_kind(kind: SweepKind) -> Self {
        match kind {
            SweepKind::Sequential => Self::sequential(),
            SweepKind::Parallel => Self::parallel(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>, args: Vec<String>) -> Self {
        self.program = program.into();
        self.program_args = args;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_n_values(mut self, n_values: Vec<u64>) -> Self {
        self.n_values = n_values;
        self
    }

    #[must_use]
    pub fn with_thread_values(mut self, thread_values: Vec<u32>) -> Self {
        self.thread_values = thread_values;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub fn with_parse_failure(mut self, policy: ParseFailurePolicy) -> Self {
        self.parse_failure = policy;
        self
    }

    /// Number of tuples the sweep will run.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.thread_values.len() * self.n_values.len()
    }

    /// Check the configuration before any solver is launched.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.program.trim().is_empty() {
            return Err(SweepError::Config("solver program is empty".into()));
        }
        if self.marker.is_empty() {
            return Err(SweepError::Config("marker phrase is empty".into()));
        }
        if self.n_values.contains(&0) {
            return Err(SweepError::Config("problem sizes must be positive".into()));
        }
        if self.thread_values.contains(&0) {
            return Err(SweepError::Config("thread counts must be positive".into()));
        }
        if self.kind == SweepKind::Sequential && self.thread_values != [SEQUENTIAL_THREADS] {
            return Err(SweepError::Config(format!(
                "sequential sweeps run with exactly {SEQUENTIAL_THREADS} thread, got {:?}",
                self.thread_values
            )));
        }
        Ok(())
    }
}
