//! # Stats Subcommand
//!
//! Prints snapshot statistics in the `GET /stats` response shape.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use landchain_core::StatsSummary;

/// Arguments for the `landchain stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Snapshot JSON as served by `GET /api/blockchain`.
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
}

/// Execute the stats subcommand.
pub fn run_stats(args: &StatsArgs) -> Result<u8> {
    let chain = crate::load_export(&args.input)?.into_chain();
    let summary = StatsSummary::from(chain.stats());
    crate::print_json(&serde_json::to_value(summary).context("failed to render stats")?)?;
    Ok(0)
}
