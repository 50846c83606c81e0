//! wavebench: benchmark driver for an external wave-equation solver.

use std::process::ExitCode;

use wavebench_cli::ui::print_error;
use wavebench_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr so report progress on stdout stays clean
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let result = app::run(&config);
    if let Err(err) = &result {
        print_error(&format!("{err:#}"));
    }
    ExitCode::from(errors::exit_status(&result))
}
