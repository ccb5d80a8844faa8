//! # Wire Summaries
//!
//! JSON bodies of `GET /stats` and `GET /verify`. The HTTP service and the
//! offline auditor both render through these types, so the two outputs
//! share one definition.
//!
//! With the `openapi` feature enabled the types also derive
//! `utoipa::ToSchema`.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::stats::Stats;
use crate::verify::{VerificationIssue, VerificationReport};

/// Ledger statistics as served by `GET /stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatsSummary {
    /// Number of records.
    pub total_blocks: usize,
    /// Number of distinct uid strings.
    pub unique_uids: usize,
    /// Equal to `total_blocks`; kept under this name for existing clients.
    pub latest_block: usize,
    /// Record at index 0, if any.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub genesis_block: Option<Record>,
    /// Most recently appended record, if any.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub latest_block_data: Option<Record>,
}

impl From<Stats> for StatsSummary {
    fn from(stats: Stats) -> Self {
        Self {
            total_blocks: stats.total_records,
            unique_uids: stats.unique_subjects,
            latest_block: stats.total_records,
            genesis_block: stats.genesis,
            latest_block_data: stats.latest,
        }
    }
}

/// One integrity violation in a verification summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerificationDetail {
    /// Position of the offending record.
    pub block_index: u64,
    /// Always `"INVALID"`.
    pub status: String,
    /// Human-readable label, e.g. "Hash mismatch".
    pub issue: String,
    /// Machine-readable code, e.g. "HASH_MISMATCH".
    pub code: String,
    /// Subject identifier of the offending record.
    pub uid: String,
}

impl From<VerificationIssue> for VerificationDetail {
    fn from(issue: VerificationIssue) -> Self {
        Self {
            block_index: issue.index,
            status: "INVALID".into(),
            issue: issue.kind.description().into(),
            code: issue.kind.as_str().into(),
            uid: issue.uid,
        }
    }
}

/// Result of a full verification pass as served by `GET /verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerificationSummary {
    /// `true` iff `verification_details` is empty.
    pub is_valid: bool,
    /// Number of records scanned.
    pub total_blocks: usize,
    /// Every issue found, ordered by index then by check.
    pub verification_details: Vec<VerificationDetail>,
}

impl From<VerificationReport> for VerificationSummary {
    fn from(report: VerificationReport) -> Self {
        Self {
            is_valid: report.is_valid,
            total_blocks: report.total_records,
            verification_details: report.issues.into_iter().map(Into::into).collect(),
        }
    }
}
