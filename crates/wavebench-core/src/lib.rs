//! # wavebench-core
//!
//! Core types for the wave-equation benchmark drivers: run parameters and
//! results, sweep policies, error types, and the solver output scraper.

pub mod constants;
pub mod error;
pub mod params;
pub mod policy;
pub mod result;
pub mod scraper;

// Re-exports
pub use constants::{exit_codes, DEFAULT_N_VALUES, DEFAULT_THREAD_VALUES, REPORT_HEADER};
pub use error::{ScrapeError, SweepError};
pub use params::{RunParameters, SweepKind};
pub use policy::{MatchMode, ParseFailurePolicy};
pub use result::{ResultSet, RunResult};
pub use scraper::Scraper;
