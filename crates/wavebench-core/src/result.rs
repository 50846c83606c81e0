//! Run results and the per-sweep result set.

use serde::Serialize;

use crate::params::RunParameters;

/// A completed, successfully parsed measurement for one tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunResult {
    pub threads: u32,
    pub n: u64,
    pub elapsed_secs: f64,
}

impl RunResult {
    #[must_use]
    pub fn new(params: RunParameters, elapsed_secs: f64) -> Self {
        Self {
            threads: params.threads,
            n: params.n,
            elapsed_secs,
        }
    }

    /// The tuple that produced this result.
    #[must_use]
    pub fn params(&self) -> RunParameters {
        RunParameters::new(self.threads, self.n)
    }

    /// Format as a report line, without the trailing newline.
    #[must_use]
    pub fn report_line(&self) -> String {
        format!("{}, {}, {:.6}", self.threads, self.n, self.elapsed_secs)
    }
}

/// Append-only, ordered collection of run results.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<RunResult>);

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: RunResult) {
        self.0.push(result);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RunResult> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RunResult] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RunResult;
    type IntoIter = std::slice::Iter<'a, RunResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
