//! Runs the `landchain` binary against snapshot files on disk.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use landchain_core::{HashChain, NewRecord};

fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_landchain")
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .expect("failed to run landchain")
}

fn write_snapshot(dir: &Path, value: &serde_json::Value) -> PathBuf {
    let path = dir.join("ledger.json");
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

fn sample_snapshot() -> serde_json::Value {
    let chain = HashChain::new();
    chain
        .append(NewRecord::new("John Doe", "UID001", 35, "Land parcel #123"))
        .unwrap();
    chain
        .append(NewRecord::new("Jane Smith", "UID002", 42, "Land parcel #456"))
        .unwrap();
    serde_json::to_value(chain.export()).unwrap()
}

#[test]
fn verify_intact_snapshot_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(dir.path(), &sample_snapshot());

    let output = run(&["verify", "--input", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["is_valid"], true);
    assert_eq!(report["total_blocks"], 2);
}

#[test]
fn verify_tampered_snapshot_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let mut snapshot = sample_snapshot();
    snapshot["blockchain"][1]["age"] = serde_json::json!(99);
    let path = write_snapshot(dir.path(), &snapshot);

    let output = run(&["verify", "--input", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["is_valid"], false);
    assert_eq!(report["verification_details"][0]["block_index"], 1);
    assert_eq!(report["verification_details"][0]["issue"], "Hash mismatch");
}

#[test]
fn verify_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let output = run(&["verify", "--input", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read snapshot"), "stderr: {stderr}");
}

#[test]
fn stats_prints_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(dir.path(), &sample_snapshot());

    let output = run(&["stats", "--input", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total_blocks"], 2);
    assert_eq!(stats["unique_uids"], 2);
}

#[test]
fn digest_matches_genesis_record() {
    let snapshot = sample_snapshot();
    let genesis = &snapshot["blockchain"][0];

    let output = run(&[
        "digest",
        "--timestamp",
        genesis["timestamp"].as_str().unwrap(),
        "--name",
        "John Doe",
        "--uid",
        "UID001",
        "--age",
        "35",
        "--land",
        "Land parcel #123",
        "--expect",
        genesis["hash"].as_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), genesis["hash"].as_str().unwrap());
}
