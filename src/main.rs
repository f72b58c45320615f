use anyhow::Context;
use std::process::ExitCode;
use std::time::Instant;
use termtimer::cli::{Cli, Launch, USAGE};
use termtimer::config::Config;
use termtimer::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing();

    let launch = match cli.launch() {
        Ok(launch) => launch,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, launch) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, launch: Launch) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let reset = cli.reset_behavior(&config);
    tracing::info!(?launch, ?reset, "Starting timer");

    let state = launch
        .initial_state(Instant::now())
        .with_reset_behavior(reset);
    termtimer::ui::run(state).context("Terminal UI failed")
}
