//! Application entry point and dispatch.

use anyhow::Result;

use wavebench_cli::CliPresenter;
use wavebench_core::SweepKind;
use wavebench_orchestration::summary::save_summary;
use wavebench_orchestration::{run_sweep, ProcessInvoker};

use crate::config::{AppConfig, SweepArgs, SweepCommand};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        SweepCommand::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            wavebench_cli::completion::generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
        SweepCommand::Sequential(args) => run_driver(config, SweepKind::Sequential, args, &[]),
        SweepCommand::Parallel(args) => {
            run_driver(config, SweepKind::Parallel, &args.sweep, &args.threads)
        }
    }
}

fn run_driver(config: &AppConfig, kind: SweepKind, args: &SweepArgs, threads: &[u32]) -> Result<()> {
    let sweep = args.to_sweep_config(kind, threads);
    tracing::debug!(?sweep, "resolved sweep configuration");

    let invoker = ProcessInvoker::new(sweep.program.clone(), sweep.program_args.clone());
    let presenter = CliPresenter::new(config.verbose, config.quiet);
    let outcome = run_sweep(&sweep, &invoker, &presenter)?;

    if let Some(path) = args.summary.as_deref() {
        save_summary(&sweep, &outcome, path)?;
        if !config.quiet {
            println!("Summary written to {}", path.display());
        }
    }

    println!("\nResults saved to {}", sweep.output.display());
    Ok(())
}
