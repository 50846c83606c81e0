//! Default sweep parameters, marker phrases, and exit codes.

/// Header line written at the top of every report file.
pub const REPORT_HEADER: &str = "NUM_THREADS, N, Time (seconds)";

/// Default problem sizes shared by both drivers.
pub const DEFAULT_N_VALUES: [u64; 6] = [100, 1_000, 100_000, 1_000_000, 10_000_000, 100_000_000];

/// Default thread counts for the parallel driver.
pub const DEFAULT_THREAD_VALUES: [u32; 19] = [
    1, 2, 4, 8, 10, 12, 14, 16, 18, 20, 22, 24, 28, 30, 32, 36, 40, 45, 50,
];

/// Thread count used by every sequential run.
pub const SEQUENTIAL_THREADS: u32 = 1;

/// Program used to launch the solver.
pub const DEFAULT_PROGRAM: &str = "java";

/// Class name of the sequential solver.
pub const SEQUENTIAL_SOLVER: &str = "WaveEquationSec2";

/// Class name of the parallel solver.
pub const PARALLEL_SOLVER: &str = "WaveEquationPar3";

/// Marker printed by the sequential solver on its timing line.
pub const SEQUENTIAL_MARKER: &str = "Tiempo de ejecución:";

/// Marker printed by the parallel solver on its timing line.
pub const PARALLEL_MARKER: &str = "Simulación completada en";

/// Default report path for the sequential driver.
pub const SEQUENTIAL_OUTPUT: &str = "test_results_sequential.txt";

/// Default report path for the parallel driver.
pub const PARALLEL_OUTPUT: &str = "test_results.txt";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including a fatal parse failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Report or summary file could not be written.
    pub const ERROR_REPORT: i32 = 5;
    /// Solver program could not be launched.
    pub const ERROR_SPAWN: i32 = 6;
}
