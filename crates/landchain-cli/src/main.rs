//! # landchain CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use landchain_cli::digest::{run_digest, DigestArgs};
use landchain_cli::stats::{run_stats, StatsArgs};
use landchain_cli::verify::{run_verify, VerifyArgs};

/// Offline auditor for landchain ledger snapshots.
#[derive(Parser, Debug)]
#[command(name = "landchain", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify hashes and linkage of an exported snapshot.
    Verify(VerifyArgs),

    /// Print statistics for an exported snapshot.
    Stats(StatsArgs),

    /// Recompute a single record hash from its fields.
    Digest(DigestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Verify(args) => run_verify(args),
        Commands::Stats(args) => run_stats(args),
        Commands::Digest(args) => run_digest(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
