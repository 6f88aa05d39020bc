//! `space` — CLI entry point for the SPACE multi-robot task allocation
//! simulator.
//!
//! Loads a TOML config, selects one of the three decentralized allocation
//! strategies, and runs the tick loop to completion or time-out (spec.md
//! §6). Rendering, CSV/GIF export, and keyboard handling are out of scope
//! (spec.md §1) — this binary's only output is the progress line printed by
//! [`progress::ProgressPrinter`].

mod cli;
mod config_file;
mod error;
mod progress;


use std::process::ExitCode;

use clap::Parser;
use space_sim::{NoopObserver, SimBuilder, SimObserver, Strategy};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::{CliError, CliResult};
use progress::ProgressPrinter;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let strategy = Strategy::parse(&cli.strategy).ok_or_else(|| CliError::UnknownStrategy(cli.strategy.clone()))?;

    let config = config_file::load(&cli.config)?;

    let mut world = SimBuilder::new(config).strategy(strategy).seed(cli.seed).build()?;

    tracing::info!(strategy = strategy.name(), seed = cli.seed, "starting simulation");

    if cli.progress_interval == 0 {
        world.run(&mut NoopObserver);
    } else {
        world.run(&mut ProgressPrinter::new(cli.progress_interval) as &mut dyn SimObserver);
    }

    if world.mission_completed() {
        println!("mission completed at t={:.2}s", world.clock.elapsed_secs());
    } else {
        println!(
            "simulation timed out at t={:.2}s with tasks still remaining",
            world.clock.elapsed_secs()
        );
    }

    Ok(())
}
