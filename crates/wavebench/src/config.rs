//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wavebench_core::{MatchMode, ParseFailurePolicy, SweepKind};
use wavebench_orchestration::SweepConfig;

/// wavebench: parameter-sweep benchmark driver for a wave-equation solver.
#[derive(Parser, Debug)]
#[command(name = "wavebench", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: SweepCommand,

    /// Verbose output (debug logging, warnings for runs without a timing line).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only errors and the final report path).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum SweepCommand {
    /// Run the sequential solver once per problem size, with one thread.
    Sequential(SweepArgs),

    /// Run the parallel solver for every thread count and problem size.
    Parallel(ParallelArgs),

    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by both drivers. Every option falls back to the driver's default.
#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    /// Solver program (defaults to `java`).
    #[arg(long, env = "WAVEBENCH_PROGRAM")]
    pub program: Option<String>,

    /// Fixed argument placed before the run parameters; repeatable.
    ///
    /// Replaces the default solver class. When `--program` is given without
    /// any `--program-arg`, no fixed arguments are passed.
    #[arg(long = "program-arg", allow_hyphen_values = true, action = clap::ArgAction::Append)]
    pub program_args: Vec<String>,

    /// Marker phrase identifying the timing line in solver output.
    #[arg(long)]
    pub marker: Option<String>,

    /// Problem sizes, comma separated.
    #[arg(short = 'n', long = "sizes", value_delimiter = ',')]
    pub sizes: Vec<u64>,

    /// Report file path.
    #[arg(short, long, env = "WAVEBENCH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Record every timing line of a run instead of only the first.
    #[arg(long)]
    pub all_matches: bool,

    /// What to do with an unparseable timing line: abort or skip.
    #[arg(long, default_value = "abort", value_parser = parse_policy)]
    pub on_parse_error: ParseFailurePolicy,

    /// Write a JSON summary of the sweep to this path.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ParallelArgs {
    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Thread counts, comma separated.
    #[arg(short = 't', long = "threads", value_delimiter = ',')]
    pub threads: Vec<u32>,
}

fn parse_policy(s: &str) -> Result<ParseFailurePolicy, String> {
    ParseFailurePolicy::from_name(s).ok_or_else(|| format!("expected `abort` or `skip`, got `{s}`"))
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

impl SweepArgs {
    /// Apply the overrides to the defaults of `kind`.
    #[must_use]
    pub fn to_sweep_config(&self, kind: SweepKind, threads: &[u32]) -> SweepConfig {
        let mut config = SweepConfig::for_kind(kind).with_parse_failure(self.on_parse_error);

        match (&self.program, self.program_args.is_empty()) {
            (Some(program), _) => {
                config = config.with_program(program.clone(), self.program_args.clone());
            }
            (None, false) => config.program_args.clone_from(&self.program_args),
            (None, true) => {}
        }
        if let Some(marker) = &self.marker {
            config = config.with_marker(marker.clone());
        }
        if !self.sizes.is_empty() {
            config = config.with_n_values(self.sizes.clone());
        }
        if !threads.is_empty() {
            config = config.with_thread_values(threads.to_vec());
        }
        if let Some(output) = &self.output {
            config = config.with_output(output.clone());
        }
        if self.all_matches {
            config = config.with_match_mode(MatchMode::All);
        }
        config
    }
}
