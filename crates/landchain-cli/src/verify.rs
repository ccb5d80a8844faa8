//! # Verify Subcommand
//!
//! Rebuilds a ledger from a snapshot and runs the full integrity scan.
//! Output matches the `GET /verify` response body.
//!
//! Exit status: 0 when the snapshot is intact, 2 when issues were found.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use landchain_core::VerificationSummary;

/// Exit status when verification finds at least one issue.
pub const EXIT_ISSUES_FOUND: u8 = 2;

/// Arguments for the `landchain verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Snapshot JSON as served by `GET /api/blockchain`.
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let chain = crate::load_export(&args.input)?.into_chain();
    let report = chain.verify();

    let summary = VerificationSummary::from(report);
    crate::print_json(&serde_json::to_value(&summary).context("failed to render report")?)?;

    if summary.is_valid {
        tracing::info!(total = summary.total_blocks, "snapshot verified");
        Ok(0)
    } else {
        tracing::warn!(
            total = summary.total_blocks,
            issues = summary.verification_details.len(),
            "snapshot failed verification"
        );
        Ok(EXIT_ISSUES_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landchain_core::{HashChain, NewRecord};
    use serde_json::{json, Value};

    fn write_snapshot(dir: &tempfile::TempDir, value: &Value) -> PathBuf {
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    fn sample_chain() -> HashChain {
        let chain = HashChain::new();
        for uid in ["UID001", "UID002", "UID001"] {
            chain.append(NewRecord::new("n", uid, 35, "parcel")).unwrap();
        }
        chain
    }

    #[test]
    fn intact_snapshot_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = serde_json::to_value(sample_chain().export()).unwrap();
        let input = write_snapshot(&dir, &snapshot);
        assert_eq!(run_verify(&VerifyArgs { input }).unwrap(), 0);
    }

    #[test]
    fn tampered_snapshot_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let mut snapshot = serde_json::to_value(sample_chain().export()).unwrap();
        snapshot["blockchain"][0]["name"] = json!("Mallory");
        let input = write_snapshot(&dir, &snapshot);
        assert_eq!(run_verify(&VerifyArgs { input }).unwrap(), EXIT_ISSUES_FOUND);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.json");
        let err = run_verify(&VerifyArgs { input }).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read snapshot"));
    }

    #[test]
    fn rewritten_link_reports_both_checks_at_one_index() {
        let chain = sample_chain();
        let mut export = chain.export();
        export.blockchain[2].previous_hash = "f".repeat(64);
        let summary = VerificationSummary::from(export.into_chain().verify());

        assert!(!summary.is_valid);
        assert_eq!(summary.total_blocks, 3);
        let details = &summary.verification_details;
        // A rewritten link breaks both the record's own hash and its linkage.
        assert_eq!(details.len(), 2);
        assert!(details.iter().all(|d| d.block_index == 2));
        assert!(details.iter().any(|d| d.code == "BROKEN_LINKAGE"));
        assert!(details.iter().any(|d| d.code == "HASH_MISMATCH"));
    }
}
