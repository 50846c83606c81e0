//! Run parameters and sweep kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which driver a sweep belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepKind {
    /// Problem sizes only, thread count fixed at 1.
    Sequential,
    /// Cross product of thread counts and problem sizes.
    Parallel,
}

impl SweepKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(thread_count, problem_size)` tuple for one solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunParameters {
    pub threads: u32,
    pub n: u64,
}

impl RunParameters {
    #[must_use]
    pub fn new(threads: u32, n: u64) -> Self {
        Self { threads, n }
    }

    /// Positional arguments passed to the solver for this tuple.
    ///
    /// The sequential solver only takes the problem size.
    #[must_use]
    pub fn solver_args(&self, kind: SweepKind) -> Vec<String> {
        match kind {
            SweepKind::Sequential => vec![self.n.to_string()],
            SweepKind::Parallel => vec![self.threads.to_string(), self.n.to_string()],
        }
    }

    /// Human-readable description used in console error lines.
    #[must_use]
    pub fn describe(&self, kind: SweepKind) -> String {
        match kind {
            SweepKind::Sequential => format!("N={}", self.n),
            SweepKind::Parallel => self.to_string(),
        }
    }
}

impl fmt::Display for RunParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NUM_THREADS={}, N={}", self.threads, self.n)
    }
}
