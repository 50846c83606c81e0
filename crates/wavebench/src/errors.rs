//! Error handling and exit codes.

use wavebench_core::exit_codes;
use wavebench_core::SweepError;

/// Map an application error to a process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SweepError>() {
        Some(sweep) => sweep.exit_code(),
        None => exit_codes::ERROR_GENERIC,
    }
}

/// Process exit status for the outcome of a run, narrowed to the range
/// accepted by `ExitCode`.
#[must_use]
pub fn exit_status(result: &anyhow::Result<()>) -> u8 {
    let code = match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code_for(err),
    };
    u8::try_from(code).unwrap_or(1)
}
