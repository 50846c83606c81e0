//! Scraping and failure policies.

use serde::{Deserialize, Serialize};

/// How many marker lines of one invocation become results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Only the first matching line.
    #[default]
    First,
    /// Every matching line, each producing a separate result for the same tuple.
    All,
}

/// What to do when a marker line carries no parseable elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseFailurePolicy {
    /// Stop the whole sweep with an error.
    #[default]
    Abort,
    /// Log the line and carry on with the sweep.
    Skip,
}

impl ParseFailurePolicy {
    /// Parse a policy name (`abort` or `skip`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "abort" | "fatal" => Some(Self::Abort),
            "skip" | "continue" => Some(Self::Skip),
            _ => None,
        }
    }
}
