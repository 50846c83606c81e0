//! Error types for scraping and sweeping.

use std::io;
use std::path::PathBuf;

use crate::constants::exit_codes;
use crate::params::RunParameters;

/// Error extracting an elapsed time from a marker line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScrapeError {
    /// The line has no second-to-last token.
    #[error("marker line has no elapsed-time token: {0:?}")]
    MissingToken(String),

    /// The token is not a decimal number.
    #[error("cannot parse elapsed time from token {token:?}")]
    InvalidNumber { token: String },

    /// The token parsed but is negative, infinite or NaN.
    #[error("elapsed time {0} is not a non-negative finite number")]
    InvalidValue(f64),
}

/// Error that stops a sweep.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// Sweep configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The solver program could not be launched at all.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// A marker line could not be parsed and the policy is to abort.
    #[error("unparseable solver output for {params}: {line:?}")]
    Parse {
        params: RunParameters,
        line: String,
        #[source]
        source: ScrapeError,
    },

    /// The report file could not be created or written.
    #[error("report file {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON summary could not be written.
    #[error("summary file {}: {source}", path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SweepError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => exit_codes::ERROR_CONFIG,
            Self::Spawn { .. } => exit_codes::ERROR_SPAWN,
            Self::Parse { .. } => exit_codes::ERROR_GENERIC,
            Self::Report { .. } | Self::Summary { .. } => exit_codes::ERROR_REPORT,
        }
    }
}
