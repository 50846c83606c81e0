//! Shared fixtures for the cross-crate integration tests.

use std::cell::RefCell;

use wavebench_core::{RunParameters, SweepError, SweepKind};
use wavebench_orchestration::{Invocation, SolverInvoker};

/// Stand-in solver that prints the way the real solvers do.
///
/// Runs listed in `failing` exit with status 1; every other run prints a
/// timing line whose value is derived from the tuple.
#[derive(Debug, Default)]
pub struct FakeSolver {
    failing: Vec<RunParameters>,
    garbled: Vec<RunParameters>,
    calls: RefCell<Vec<RunParameters>>,
}

impl FakeSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `params` exit unsuccessfully.
    #[must_use]
    pub fn failing(mut self, params: RunParameters) -> Self {
        self.failing.push(params);
        self
    }

    /// Make `params` print a timing line without a number.
    #[must_use]
    pub fn garbled(mut self, params: RunParameters) -> Self {
        self.garbled.push(params);
        self
    }

    /// Tuples invoked so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RunParameters> {
        self.calls.borrow().clone()
    }
}

/// Elapsed time the fake solver reports for `params`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fake_elapsed(params: &RunParameters) -> f64 {
    params.n as f64 / 1_000_000.0 / f64::from(params.threads)
}

fn timing_line(kind: SweepKind, value: &str) -> String {
    match kind {
        SweepKind::Sequential => format!(
            "Simulación completada. Resultados guardados en wave_output.txt.\n\
             Tiempo de ejecución: {value} segundos\n"
        ),
        SweepKind::Parallel => format!("Simulación completada en {value} segundos\n"),
    }
}

impl SolverInvoker for FakeSolver {
    fn invoke(&self, kind: SweepKind, params: &RunParameters) -> Result<Invocation, SweepError> {
        self.calls.borrow_mut().push(*params);
        if self.failing.contains(params) {
            return Ok(Invocation {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: "java.lang.OutOfMemoryError: Java heap space\n".to_string(),
            });
        }
        let value = if self.garbled.contains(params) {
            "NaN,?".to_string()
        } else {
            format!("{:.6}", fake_elapsed(params)).replace('.', ",")
        };
        Ok(Invocation {
            exit_code: Some(0),
            stdout: timing_line(kind, &value),
            stderr: String::new(),
        })
    }
}
