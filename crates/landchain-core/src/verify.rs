//! # Verification Engine
//!
//! Walks a sequence of records from genesis to tip and checks, per record:
//!
//! 1. the stored hash equals the hash recomputed from the stored fields;
//! 2. for index > 0, `previous_hash` equals the stored hash of the
//!    predecessor;
//! 3. for index 0, `previous_hash` equals the genesis sentinel.
//!
//! The scan never stops early. A single tampered record typically yields a
//! `HASH_MISMATCH` at its own index and a `BROKEN_LINKAGE` at the next one,
//! and both are reported.

use serde::{Deserialize, Serialize};

use crate::digest::GENESIS_PREVIOUS_HASH;
use crate::record::Record;

/// Category of integrity violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// Stored hash does not match the recomputed hash.
    HashMismatch,
    /// `previous_hash` does not match the predecessor's hash.
    BrokenLinkage,
    /// Genesis `previous_hash` is not the all-zero sentinel.
    InvalidGenesis,
}

impl IssueKind {
    /// Machine-readable code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HashMismatch => "HASH_MISMATCH",
            Self::BrokenLinkage => "BROKEN_LINKAGE",
            Self::InvalidGenesis => "INVALID_GENESIS",
        }
    }

    /// Human-readable label used in verification responses.
    pub fn description(&self) -> &'static str {
        match self {
            Self::HashMismatch => "Hash mismatch",
            Self::BrokenLinkage => "Broken chain linkage",
            Self::InvalidGenesis => "Invalid genesis block",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationIssue {
    /// Position of the offending record.
    pub index: u64,
    /// What is wrong.
    pub kind: IssueKind,
    /// Subject identifier of the offending record.
    pub uid: String,
}

/// Outcome of a full integrity scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// `true` iff `issues` is empty.
    pub is_valid: bool,
    /// Number of records scanned.
    pub total_records: usize,
    /// Every issue found, ordered by index then by check.
    pub issues: Vec<VerificationIssue>,
}

impl VerificationReport {
    /// Issues recorded against a single index.
    pub fn issues_at(&self, index: u64) -> impl Iterator<Item = &VerificationIssue> {
        self.issues.iter().filter(move |i| i.index == index)
    }
}

/// Verify hash integrity and linkage of `records`, in order.
///
/// Pure and read-only. An empty slice is a valid chain.
pub fn verify_records(records: &[Record]) -> VerificationReport {
    let mut issues = Vec::new();
    let mut previous: Option<&Record> = None;

    for (position, record) in records.iter().enumerate() {
        let index = position as u64;
        let mut flag = |kind| {
            issues.push(VerificationIssue {
                index,
                kind,
                uid: record.uid.clone(),
            })
        };

        if !record.is_hash_valid() {
            flag(IssueKind::HashMismatch);
        }

        match previous {
            Some(prev) if record.previous_hash != prev.hash => flag(IssueKind::BrokenLinkage),
            None if record.previous_hash != GENESIS_PREVIOUS_HASH => {
                flag(IssueKind::InvalidGenesis)
            }
            _ => {}
        }

        previous = Some(record);
    }

    // Callers own the summary event; per-issue detail stays at debug.
    for issue in &issues {
        tracing::debug!(
            index = issue.index,
            kind = %issue.kind,
            uid = %issue.uid,
            "ledger integrity violation"
        );
    }

    VerificationReport {
        is_valid: issues.is_empty(),
        total_records: records.len(),
        issues,
    }
}
