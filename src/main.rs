//! Gridwalk CLI - play a map in the terminal or check it.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use cli::CliError;
use gridwalk::config::{
    DEFAULT_COOLDOWN_MS, DEFAULT_MAP_FILE, DEFAULT_REDRAW_INTERVAL, DEFAULT_STARTING_HEALTH,
    DEFAULT_TICK_MS, MAX_STARTING_HEALTH,
};
use gridwalk::SimConfig;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Gridwalk - a terminal grid game with concurrently moving enemies
#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

/// Simulation tuning shared by the commands that run a game
#[derive(clap::Args, Debug, Clone, Copy)]
struct SimArgs {
    /// Milliseconds between two moves of the same actor
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Minimum milliseconds between two hits on the player
    #[arg(long, default_value_t = DEFAULT_COOLDOWN_MS)]
    cooldown_ms: u64,

    /// Starting health
    #[arg(
        long,
        default_value_t = DEFAULT_STARTING_HEALTH,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_STARTING_HEALTH))
    )]
    health: u32,
}

impl SimArgs {
    fn config(self) -> SimConfig {
        SimConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            damage_cooldown: Duration::from_millis(self.cooldown_ms),
            starting_health: self.health,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a map in the terminal
    Play {
        /// Map file
        #[arg(default_value = DEFAULT_MAP_FILE)]
        map: PathBuf,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Let the actors run without a player and print the final map
    Run {
        /// Map file
        #[arg(default_value = DEFAULT_MAP_FILE)]
        map: PathBuf,

        /// How long to run, in milliseconds
        #[arg(short, long, default_value = "3000")]
        duration_ms: u64,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Check a map file and print a summary
    Check {
        /// Map file
        #[arg(default_value = DEFAULT_MAP_FILE)]
        map: PathBuf,
    },
}

fn init_tracing(log_file: Option<&Path>) -> Result<(), CliError> {
    // Without a log file, events are dropped so the TUI stays intact
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .map_err(|e| CliError::new(format!("Failed to create {}: {e}", path.display())))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to install logger: {e}")))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = init_tracing(args.log_file.as_deref()).and_then(|()| match args.command {
        Commands::Play { map, sim } => cli::play::execute(&map, sim.config()),
        Commands::Run {
            map,
            duration_ms,
            sim,
        } => cli::run::execute(&map, sim.config(), Duration::from_millis(duration_ms)),
        Commands::Check { map } => cli::check::execute(&map),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
