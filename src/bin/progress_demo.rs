use std::{io, process::ExitCode};

use clap::{Parser, ValueEnum};
use emplace::progress::{
    bars_with_algorithm, bars_with_loop, log_progress, shared_writer, task_names,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Build the bars with an explicit loop.
    Loop,
    /// Build the bars by transforming task names into an emplacer.
    Algorithm,
    Both,
}

/// Builds one progress bar per task and advances each of them once.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of tasks.
    #[arg(short = 't', long = "tasks", default_value_t = 5)]
    tasks: usize,

    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let tasks = task_names(cli.tasks);
    let out = shared_writer(io::stdout());

    if matches!(cli.mode, Mode::Loop | Mode::Both) {
        let bars = bars_with_loop(&out, &tasks)?;
        log::info!("Built {} bars with a loop", bars.len());
        log_progress(&bars)?;
    }

    if matches!(cli.mode, Mode::Algorithm | Mode::Both) {
        let bars = bars_with_algorithm(&out, &tasks)?;
        log::info!("Built {} bars with transform", bars.len());
        log_progress(&bars)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        log::error!("{:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
