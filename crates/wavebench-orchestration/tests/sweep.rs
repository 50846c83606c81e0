//! Sweep driver tests against scripted solvers.

use std::cell::RefCell;
use std::path::Path;

use tempfile::TempDir;

use wavebench_core::{
    MatchMode, ParseFailurePolicy, RunParameters, RunResult, ScrapeError, SweepError, SweepKind,
};
use wavebench_orchestration::{
    run_sweep, Invocation, NullObserver, SolverInvoker, SweepConfig, SweepObserver,
};

const PAR_MARKER: &str = "Simulación completada en";
const SEQ_MARKER: &str = "Tiempo de ejecución:";

/// Solver whose behaviour is a closure over the tuple; records every call.
struct ScriptedSolver<F> {
    script: F,
    calls: RefCell<Vec<RunParameters>>,
}

impl<F> ScriptedSolver<F>
where
    F: Fn(&RunParameters) -> Invocation,
{
    fn new(script: F) -> Self {
        Self {
            script,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<RunParameters> {
        self.calls.borrow().clone()
    }
}

impl<F> SolverInvoker for ScriptedSolver<F>
where
    F: Fn(&RunParameters) -> Invocation,
{
    fn invoke(&self, _kind: SweepKind, params: &RunParameters) -> Result<Invocation, SweepError> {
        self.calls.borrow_mut().push(*params);
        Ok((self.script)(params))
    }
}

fn ok(stdout: String) -> Invocation {
    Invocation {
        exit_code: Some(0),
        stdout,
        stderr: String::new(),
    }
}

fn failed(code: i32, stderr: &str) -> Invocation {
    Invocation {
        exit_code: Some(code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Elapsed time derived from the tuple so results can be checked exactly.
fn secs_for(p: &RunParameters) -> f64 {
    f64::from(p.threads) + (p.n as f64) / 1000.0
}

fn par_output(p: &RunParameters) -> String {
    let printed = format!("{:.6}", secs_for(p)).replace('.', ",");
    format!("Iniciando...\n{PAR_MARKER} {printed} segundos\n")
}

fn report_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn parallel_config(dir: &TempDir) -> SweepConfig {
    SweepConfig::parallel()
        .with_thread_values(vec![1, 2, 4])
        .with_n_values(vec![100, 1000])
        .with_output(dir.path().join("test_results.txt"))
}

#[test]
fn every_tuple_accepted_when_solver_succeeds() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir);
    let solver = ScriptedSolver::new(|p: &RunParameters| ok(par_output(p)));

    let outcome = run_sweep(&config, &solver, &NullObserver).unwrap();

    assert_eq!(outcome.attempted, 6);
    assert_eq!(outcome.results.len(), 3 * 2);
    assert_eq!(outcome.failed, 0);
    for r in &outcome.results {
        assert!((r.elapsed_secs - secs_for(&r.params())).abs() < 1e-9);
    }
    let lines = report_lines(&config.output);
    assert_eq!(lines.len(), 1 + outcome.results.len());
    assert_eq!(lines[0], "NUM_THREADS, N, Time (seconds)");
}

#[test]
fn report_rows_follow_threads_outer_order() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir);
    let solver = ScriptedSolver::new(|p: &RunParameters| ok(par_output(p)));

    run_sweep(&config, &solver, &NullObserver).unwrap();

    let rows: Vec<(String, String)> = report_lines(&config.output)[1..]
        .iter()
        .map(|l| {
            let cols: Vec<&str> = l.split(", ").collect();
            (cols[0].to_string(), cols[1].to_string())
        })
        .collect();
    let expected: Vec<(String, String)> = [(1, 100), (1, 1000), (2, 100), (2, 1000), (4, 100), (4, 1000)]
        .iter()
        .map(|(t, n)| (t.to_string(), n.to_string()))
        .collect();
    assert_eq!(rows, expected);
    assert_eq!(
        solver.calls(),
        expected_calls(&[1, 2, 4], &[100, 1000])
    );
}

fn expected_calls(threads: &[u32], sizes: &[u64]) -> Vec<RunParameters> {
    threads
        .iter()
        .flat_map(|&t| sizes.iter().map(move |&n| RunParameters::new(t, n)))
        .collect()
}

#[test]
fn spec_example_line_yields_three_and_a_quarter() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir)
        .with_thread_values(vec![2])
        .with_n_values(vec![1000]);
    let solver = ScriptedSolver::new(|_: &RunParameters| {
        ok(format!("{PAR_MARKER} 3,250000 segundos\n"))
    });

    let outcome = run_sweep(&config, &solver, &NullObserver).unwrap();

    assert_eq!(
        outcome.results.as_slice(),
        &[RunResult::new(RunParameters::new(2, 1000), 3.25)]
    );
    assert_eq!(report_lines(&config.output)[1], "2, 1000, 3.250000");
}

#[test]
fn failed_tuples_are_skipped_and_sweep_continues() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir);
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        if p.threads == 2 || (p.threads == 4 && p.n == 100) {
            failed(1, "OutOfMemoryError")
        } else {
            ok(par_output(p))
        }
    });

    let outcome = run_sweep(&config, &solver, &NullObserver).unwrap();

    assert_eq!(solver.calls().len(), 6);
    assert_eq!(outcome.failed, 3);
    let accepted: Vec<RunParameters> = outcome.results.iter().map(RunResult::params).collect();
    assert_eq!(
        accepted,
        vec![
            RunParameters::new(1, 100),
            RunParameters::new(1, 1000),
            RunParameters::new(4, 1000),
        ]
    );
    let lines = report_lines(&config.output);
    assert_eq!(lines.len(), 1 + 3);
    assert!(lines.iter().all(|l| !l.starts_with("2, ")));
}

#[test]
fn unparseable_line_aborts_remaining_tuples() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir);
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        if p.threads == 2 && p.n == 100 {
            ok(format!("{PAR_MARKER} abc segundos\n"))
        } else {
            ok(par_output(p))
        }
    });

    let err = run_sweep(&config, &solver, &NullObserver).unwrap_err();

    match err {
        SweepError::Parse { params, source, .. } => {
            assert_eq!(params, RunParameters::new(2, 100));
            assert_eq!(source, ScrapeError::InvalidNumber { token: "abc".into() });
        }
        other => panic!("unexpected error: {other}"),
    }
    // Two tuples before the failure, then nothing.
    assert_eq!(solver.calls().len(), 3);
    let lines = report_lines(&config.output);
    assert_eq!(lines, vec!["NUM_THREADS, N, Time (seconds)", "1, 100, 1.100000", "1, 1000, 2.000000"]);
}

#[test]
fn skip_policy_continues_past_unparseable_line() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir).with_parse_failure(ParseFailurePolicy::Skip);
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        if p.threads == 2 && p.n == 100 {
            ok(format!("{PAR_MARKER} abc segundos\n"))
        } else {
            ok(par_output(p))
        }
    });

    let outcome = run_sweep(&config, &solver, &NullObserver).unwrap();

    assert_eq!(solver.calls().len(), 6);
    assert_eq!(outcome.parse_skipped, 1);
    assert_eq!(outcome.results.len(), 5);
    assert!(!outcome
        .results
        .iter()
        .any(|r| r.params() == RunParameters::new(2, 100)));
}

#[test]
fn missing_marker_produces_no_result() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir);
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        if p.n == 1000 {
            ok("Simulación terminada sin tiempo\n".to_string())
        } else {
            ok(par_output(p))
        }
    });

    let outcome = run_sweep(&config, &solver, &NullObserver).unwrap();

    assert_eq!(outcome.unmatched, 3);
    assert_eq!(outcome.results.len(), 3);
    assert!(outcome.results.iter().all(|r| r.n == 100));
}

#[test]
fn first_match_by_default_all_matches_on_request() {
    let dir = TempDir::new().unwrap();
    let twice = |_: &RunParameters| ok(format!("{PAR_MARKER} 1,0 s\n{PAR_MARKER} 2,0 s\n"));

    let config = parallel_config(&dir)
        .with_thread_values(vec![1])
        .with_n_values(vec![10]);
    let outcome = run_sweep(&config, &ScriptedSolver::new(twice), &NullObserver).unwrap();
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results.as_slice()[0].elapsed_secs, 1.0);

    let config = config.with_match_mode(MatchMode::All);
    let outcome = run_sweep(&config, &ScriptedSolver::new(twice), &NullObserver).unwrap();
    let times: Vec<f64> = outcome.results.iter().map(|r| r.elapsed_secs).collect();
    assert_eq!(times, vec![1.0, 2.0]);
    assert_eq!(report_lines(&config.output).len(), 3);
}

#[test]
fn sequential_sweep_runs_each_size_once() {
    let dir = TempDir::new().unwrap();
    let config = SweepConfig::sequential()
        .with_n_values(vec![100, 1000, 100_000])
        .with_output(dir.path().join("test_results_sequential.txt"));
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        ok(format!(
            "Simulación completada. Resultados guardados.\n{SEQ_MARKER} {},5 segundos\n",
            p.n
        ))
    });

    let outcome = run_sweep(&config, &solver, &NullObserver).unwrap();

    assert_eq!(outcome.results.len(), 3);
    assert!(outcome.results.iter().all(|r| r.threads == 1));
    assert_eq!(
        report_lines(&config.output)[1..],
        ["1, 100, 100.500000", "1, 1000, 1000.500000", "1, 100000, 100000.500000"]
    );
}

#[test]
fn invalid_config_launches_nothing() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir).with_thread_values(vec![0]);
    let solver = ScriptedSolver::new(|p: &RunParameters| ok(par_output(p)));

    let err = run_sweep(&config, &solver, &NullObserver).unwrap_err();

    assert!(matches!(err, SweepError::Config(_)));
    assert!(solver.calls().is_empty());
    assert!(!config.output.exists());
}

#[test]
fn unwritable_report_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir).with_output(dir.path().join("nope").join("r.txt"));
    let solver = ScriptedSolver::new(|p: &RunParameters| ok(par_output(p)));

    let err = run_sweep(&config, &solver, &NullObserver).unwrap_err();

    assert!(matches!(err, SweepError::Report { .. }));
    assert!(solver.calls().is_empty());
}

#[derive(Default)]
struct EventLog(RefCell<Vec<String>>);

impl SweepObserver for EventLog {
    fn on_sweep_start(&self, kind: SweepKind, runs: usize) {
        self.0.borrow_mut().push(format!("start {kind} {runs}"));
    }
    fn on_run_start(&self, _kind: SweepKind, params: &RunParameters) {
        self.0.borrow_mut().push(format!("run {params}"));
    }
    fn on_run_complete(&self, _kind: SweepKind, result: &RunResult) {
        self.0.borrow_mut().push(format!("done {}", result.report_line()));
    }
    fn on_run_failed(&self, _kind: SweepKind, params: &RunParameters, stderr: &str) {
        self.0.borrow_mut().push(format!("failed {params}: {stderr}"));
    }
    fn on_parse_skipped(
        &self,
        kind: SweepKind,
        params: &RunParameters,
        line: &str,
        _error: &ScrapeError,
    ) {
        self.0
            .borrow_mut()
            .push(format!("skipped {}: {line}", params.describe(kind)));
    }
    fn on_sweep_complete(&self, outcome: &wavebench_orchestration::SweepOutcome) {
        self.0
            .borrow_mut()
            .push(format!("end {}", outcome.results.len()));
    }
}

#[test]
fn observer_sees_progress_in_order() {
    let dir = TempDir::new().unwrap();
    let config = parallel_config(&dir)
        .with_thread_values(vec![1, 2])
        .with_n_values(vec![100]);
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        if p.threads == 2 {
            failed(2, "boom")
        } else {
            ok(par_output(p))
        }
    });
    let log = EventLog::default();

    run_sweep(&config, &solver, &log).unwrap();

    assert_eq!(
        log.0.into_inner(),
        vec![
            "start parallel 2",
            "run NUM_THREADS=1, N=100",
            "done 1, 100, 1.100000",
            "run NUM_THREADS=2, N=100",
            "failed NUM_THREADS=2, N=100: boom",
            "end 1",
        ]
    );
}

#[test]
fn skipped_line_is_reported_with_sweep_kind() {
    let dir = TempDir::new().unwrap();
    let config = SweepConfig::sequential()
        .with_n_values(vec![100, 1000])
        .with_output(dir.path().join("test_results_sequential.txt"))
        .with_parse_failure(ParseFailurePolicy::Skip);
    let solver = ScriptedSolver::new(|p: &RunParameters| {
        if p.n == 1000 {
            ok(format!("{SEQ_MARKER} ? segundos\n"))
        } else {
            ok(format!("{SEQ_MARKER} 0,25 segundos\n"))
        }
    });
    let log = EventLog::default();

    let outcome = run_sweep(&config, &solver, &log).unwrap();

    assert_eq!(outcome.parse_skipped, 1);
    assert_eq!(
        log.0.into_inner(),
        vec![
            "start sequential 2",
            "run NUM_THREADS=1, N=100",
            "done 1, 100, 0.250000",
            "run NUM_THREADS=1, N=1000",
            "skipped N=1000: Tiempo de ejecución: ? segundos",
            "end 1",
        ]
    );
}
