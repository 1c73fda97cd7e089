// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Star Battle solver command line.

use anyhow::Context;
use clap::Parser;
use star_battle::display::format_elapsed;
use star_battle::{
    config, render, ParallelCoordinator, PlainGrid, PuzzleDefinition, SolvedGrid, SolverConfig,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "star-battle")]
#[command(author, version, about = "Parallel Star Battle puzzle solver", long_about = None)]
struct Cli {
    /// Puzzle file: one hex digit shape id per cell, row-major
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Worker threads (defaults to available parallelism)
    #[arg(short, long, env = "STAR_BATTLE_WORKERS")]
    workers: Option<NonZeroUsize>,

    /// Milliseconds between checks for a finished worker
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    poll_ms: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let definition = PuzzleDefinition::load(&cli.input)
        .with_context(|| format!("cannot load puzzle from {}", cli.input.display()))?;
    println!("Input Grid:");
    println!("{}", render(&definition, &PlainGrid));

    let config = SolverConfig::new(
        cli.workers.unwrap_or_else(config::default_workers),
        Duration::from_millis(cli.poll_ms),
    );
    println!("Solving on {} threads...", config.workers());

    let report = ParallelCoordinator::new(config).solve(&definition);
    println!();
    match report.outcome.solution() {
        Some(solution) => {
            println!("Solution:");
            println!("{}", render(&definition, &SolvedGrid(solution)));
            println!("Solved in {}", format_elapsed(report.elapsed));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No solution found");
            Ok(ExitCode::FAILURE)
        }
    }
}
