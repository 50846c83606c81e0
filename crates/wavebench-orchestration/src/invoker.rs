//! Solver invocation.

use std::process::{Command, Stdio};

use wavebench_core::{RunParameters, SweepError, SweepKind};

/// Captured result of one solver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Invocation {
    /// A zero exit code. A signal-terminated process is a failure.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs the solver for one tuple and waits for it to finish.
pub trait SolverInvoker {
    fn invoke(&self, kind: SweepKind, params: &RunParameters) -> Result<Invocation, SweepError>;
}

/// Launches a real process: `program [fixed args...] [tuple args...]`.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
    fixed_args: Vec<String>,
}

impl ProcessInvoker {
    #[must_use]
    pub fn new(program: impl Into<String>, fixed_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            fixed_args,
        }
    }

    /// Full argument vector passed after the program name.
    #[must_use]
    pub fn args_for(&self, kind: SweepKind, params: &RunParameters) -> Vec<String> {
        let mut args = self.fixed_args.clone();
        args.extend(params.solver_args(kind));
        args
    }
}

impl SolverInvoker for ProcessInvoker {
    fn invoke(&self, kind: SweepKind, params: &RunParameters) -> Result<Invocation, SweepError> {
        let args = self.args_for(kind, params);
        tracing::debug!(program = %self.program, ?args, "launching solver");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SweepError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(Invocation {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
