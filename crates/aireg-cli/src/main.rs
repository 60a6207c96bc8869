//! # aireg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity flags map
//! onto the tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aireg_cli::evaluate::{run_evaluate, EvaluateArgs};
use aireg_cli::normalize::{run_normalize, NormalizeArgs};
use aireg_cli::validate::{run_validate, ValidateArgs};

/// Sovereign AI Registry CLI
///
/// Validates registry data files, normalizes heterogeneous records into
/// the canonical model shape, and evaluates individual models against
/// per-jurisdiction compliance rules.
#[derive(Parser, Debug)]
#[command(name = "aireg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a registry data file and report every violation.
    Validate(ValidateArgs),

    /// Normalize a registry data file into canonical model JSON.
    Normalize(NormalizeArgs),

    /// Evaluate one model against one jurisdiction's rules.
    Evaluate(EvaluateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Normalize(args) => run_normalize(&args),
        Commands::Evaluate(args) => run_evaluate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
