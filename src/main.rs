//! Habitat CLI - Command-line interface for the Martian habitat simulation.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Habitat - A deterministic Martian habitat simulation
#[derive(Parser, Debug)]
#[command(name = "habitat")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session
    Play {
        /// Map file to load (default: ask at startup)
        #[arg(short = 'f', long = "file")]
        map: Option<PathBuf>,

        /// Habitability history log (default: $HABITAT_LOG or resources/habitability.log)
        #[arg(short = 'l', long = "log")]
        log: Option<PathBuf>,
    },

    /// Print the habitability status of a map
    Status {
        /// Map file
        #[arg(required = true)]
        map: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Validate a map file
    Validate {
        /// Map file to validate
        #[arg(required = true)]
        map: PathBuf,
    },

    /// Print the habitability history log
    History {
        /// Habitability history log (default: $HABITAT_LOG or resources/habitability.log)
        #[arg(short = 'l', long = "log")]
        log: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let result = match args.command {
        Commands::Play { map, log } => cli::play::execute(map, log),
        Commands::Status { map, format } => cli::status::execute(&map, format),
        Commands::Validate { map } => cli::validate::execute(&map),
        Commands::History { log, format } => cli::history::execute(log, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
