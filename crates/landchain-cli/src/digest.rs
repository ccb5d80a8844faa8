//! # Digest Subcommand
//!
//! Recomputes a single record hash from its fields, so one entry of a
//! snapshot can be checked by hand. With `--expect`, compares the result
//! against a stored hash and exits 2 on mismatch.

use anyhow::{bail, Context, Result};
use clap::Args;
use landchain_core::{is_hex_digest, NewRecord, Record, Timestamp, GENESIS_PREVIOUS_HASH};

/// Exit status when the recomputed hash differs from `--expect`.
pub const EXIT_MISMATCH: u8 = 2;

/// Arguments for the `landchain digest` subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Record timestamp (ISO-8601, e.g. `2024-01-15T10:30:00.123456Z`).
    #[arg(long)]
    pub timestamp: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub uid: String,
    #[arg(long, allow_hyphen_values = true)]
    pub age: i64,
    #[arg(long)]
    pub land: String,
    /// Hash of the preceding record. Defaults to the genesis sentinel.
    #[arg(long, default_value = GENESIS_PREVIOUS_HASH)]
    pub previous_hash: String,
    /// Stored hash to compare against.
    #[arg(long)]
    pub expect: Option<String>,
}

/// Execute the digest subcommand.
pub fn run_digest(args: &DigestArgs) -> Result<u8> {
    let hash = compute(args)?;
    println!("{hash}");

    match &args.expect {
        Some(expected) if expected.eq_ignore_ascii_case(&hash) => {
            tracing::info!("digest matches expected hash");
            Ok(0)
        }
        Some(expected) => {
            tracing::warn!(%expected, computed = %hash, "digest mismatch");
            Ok(EXIT_MISMATCH)
        }
        None => Ok(0),
    }
}

/// Recompute the record hash for `args`.
pub fn compute(args: &DigestArgs) -> Result<String> {
    let timestamp = Timestamp::parse(&args.timestamp).context("invalid --timestamp")?;
    if !is_hex_digest(&args.previous_hash) {
        bail!(
            "--previous-hash must be 64 lower-case hex characters, got {:?}",
            args.previous_hash
        );
    }
    let input = NewRecord::new(&args.name, &args.uid, args.age, &args.land);
    let record = Record::seal(0, timestamp, input, args.previous_hash.clone());
    Ok(record.hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landchain_core::{record_digest, HashChain};

    fn args_for(record: &Record) -> DigestArgs {
        DigestArgs {
            timestamp: record.timestamp.to_iso8601(),
            name: record.name.clone(),
            uid: record.uid.clone(),
            age: record.age,
            land: record.land.clone(),
            previous_hash: record.previous_hash.clone(),
            expect: Some(record.hash.clone()),
        }
    }

    #[test]
    fn recomputes_stored_hashes() {
        let chain = HashChain::new();
        chain.append(NewRecord::new("John Doe", "UID001", 35, "Parcel #123")).unwrap();
        chain.append(NewRecord::new("Jane Smith", "UID002", 42, "Parcel #456")).unwrap();

        for record in chain.get_all() {
            let args = args_for(&record);
            assert_eq!(compute(&args).unwrap(), record.hash);
            assert_eq!(run_digest(&args).unwrap(), 0);
        }
    }

    #[test]
    fn whole_second_timestamp_omits_fraction() {
        let args = DigestArgs {
            timestamp: "2024-01-15T10:30:00Z".into(),
            name: "A".into(),
            uid: "1".into(),
            age: 30,
            land: "L".into(),
            previous_hash: GENESIS_PREVIOUS_HASH.into(),
            expect: None,
        };
        let expected = record_digest(
            "2024-01-15 10:30:00",
            "A",
            "1",
            "30",
            "L",
            GENESIS_PREVIOUS_HASH,
        );
        assert_eq!(compute(&args).unwrap(), expected);
    }

    #[test]
    fn mismatch_exits_two() {
        let chain = HashChain::new();
        let record = chain.append(NewRecord::new("n", "u", 1, "l")).unwrap();
        let mut args = args_for(&record);
        args.land = "tampered".into();
        assert_eq!(run_digest(&args).unwrap(), EXIT_MISMATCH);
    }

    #[test]
    fn rejects_bad_inputs() {
        let chain = HashChain::new();
        let record = chain.append(NewRecord::new("n", "u", 1, "l")).unwrap();

        let mut args = args_for(&record);
        args.timestamp = "yesterday".into();
        assert!(compute(&args).is_err());

        let mut args = args_for(&record);
        args.previous_hash = "abc".into();
        assert!(compute(&args).is_err());
    }
}
