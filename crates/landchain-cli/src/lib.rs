//! # landchain-cli: Offline Ledger Auditor
//!
//! Provides the `landchain` command-line interface for checking ledger
//! snapshots without a running service.
//!
//! ## Subcommands
//!
//! - `landchain verify`: Full integrity scan of an exported snapshot.
//! - `landchain stats`: Record and subject counts for a snapshot.
//! - `landchain digest`: Recompute one record's hash from its fields.
//!
//! Snapshots are the JSON served at `GET /api/blockchain`:
//!
//! ```bash
//! curl -s localhost:5000/api/blockchain > ledger.json
//! landchain verify --input ledger.json
//! ```

pub mod digest;
pub mod stats;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use landchain_core::ChainExport;

/// Read and parse a ledger snapshot file.
pub fn load_export(path: &Path) -> Result<ChainExport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
    let export: ChainExport = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse snapshot JSON: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        records = export.blockchain.len(),
        "loaded snapshot"
    );
    Ok(export)
}

/// Pretty-print a JSON value to stdout.
pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}
