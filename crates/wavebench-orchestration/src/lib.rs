//! # wavebench-orchestration
//!
//! Sweep configuration, solver invocation, incremental report writing, and
//! the sweep driver that ties them together.

pub mod config;
pub mod interfaces;
pub mod invoker;
pub mod report;
pub mod summary;
pub mod sweep;

pub use config::SweepConfig;
pub use interfaces::{NullObserver, SweepObserver};
pub use invoker::{Invocation, ProcessInvoker, SolverInvoker};
pub use report::ReportWriter;
pub use sweep::{generate_parameters, run_sweep, SweepOutcome};
