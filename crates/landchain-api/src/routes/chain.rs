//! # Ledger Routes
//!
//! Whole-ledger views, statistics, integrity verification and the
//! admin-only reset.

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use landchain_core::{ChainExport, Record, StatsSummary, VerificationSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Full ledger snapshot.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlockchainResponse {
    pub total_blocks: usize,
    #[schema(value_type = Vec<Object>)]
    pub blockchain: Vec<Record>,
}

impl From<ChainExport> for BlockchainResponse {
    fn from(export: ChainExport) -> Self {
        Self {
            total_blocks: export.total_blocks,
            blockchain: export.blockchain,
        }
    }
}

/// Build the read-only ledger router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/view_blockchain", get(view_blockchain))
        .route("/api/blockchain", get(api_blockchain))
        .route("/stats", get(stats))
        .route("/verify", get(verify))
}

/// Build the admin router. Callers layer authentication on top.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/clear_blockchain", post(clear_blockchain))
}

/// GET /view_blockchain: Every record in ledger order.
#[utoipa::path(
    get,
    path = "/view_blockchain",
    responses((status = 200, description = "Ledger snapshot", body = BlockchainResponse)),
    tag = "ledger"
)]
async fn view_blockchain(State(state): State<AppState>) -> Json<BlockchainResponse> {
    Json(state.chain.export().into())
}

/// GET /api/blockchain: Ledger export, re-importable by the auditor CLI.
#[utoipa::path(
    get,
    path = "/api/blockchain",
    responses((status = 200, description = "Ledger snapshot", body = BlockchainResponse)),
    tag = "ledger"
)]
async fn api_blockchain(State(state): State<AppState>) -> Json<BlockchainResponse> {
    Json(state.chain.export().into())
}

/// GET /stats: Ledger statistics.
#[utoipa::path(
    get,
    path = "/stats",
    responses((status = 200, description = "Ledger statistics", body = StatsSummary)),
    tag = "ledger"
)]
async fn stats(State(state): State<AppState>) -> Json<StatsSummary> {
    Json(state.chain.stats().into())
}

/// GET /verify: Full integrity scan.
#[utoipa::path(
    get,
    path = "/verify",
    responses((status = 200, description = "Verification result", body = VerificationSummary)),
    tag = "ledger"
)]
async fn verify(State(state): State<AppState>) -> Json<VerificationSummary> {
    let report = state.chain.verify();
    if report.is_valid {
        tracing::info!(total = report.total_records, "ledger verified");
    } else {
        tracing::warn!(
            total = report.total_records,
            issues = report.issues.len(),
            "ledger verification found issues"
        );
    }
    Json(report.into())
}

/// POST /clear_blockchain: Remove every record.
#[utoipa::path(
    post,
    path = "/clear_blockchain",
    responses(
        (status = 303, description = "Ledger cleared; redirect to the ledger view"),
        (status = 401, description = "Admin token missing or wrong", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "ledger"
)]
async fn clear_blockchain(State(state): State<AppState>) -> Redirect {
    let removed = state.chain.len();
    state.chain.clear();
    tracing::warn!(removed, "ledger cleared");
    Redirect::to("/view_blockchain")
}

#[cfg(test)]
mod tests {
    use super::*;
    use landchain_core::{HashChain, NewRecord};

    #[test]
    fn blockchain_response_matches_export() {
        let chain = HashChain::new();
        for uid in ["A", "B"] {
            chain.append(NewRecord::new("n", uid, 30, "l")).unwrap();
        }
        let resp = BlockchainResponse::from(chain.export());
        assert_eq!(resp.total_blocks, 2);
        assert_eq!(resp.blockchain[1].previous_hash, resp.blockchain[0].hash);
    }
}
