//! # Record Routes
//!
//! Submission and lookup of individual ledger records.
//!
//! - `POST /add_record`: form submission, redirects to the ledger view
//! - `POST /api/add_record`: JSON submission
//! - `GET /get_records?uid=`: first record for a subject
//! - `GET /get_history?uid=`: every record for a subject, oldest first
//! - `GET /block/{index}`: record at a position

use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use landchain_core::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use super::IndexedRecord;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_query, extract_record_form, extract_record_json, AddRecordForm};
use crate::state::AppState;

/// Query string naming a subject.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UidQuery {
    /// Subject identifier.
    pub uid: Option<String>,
}

/// JSON submission body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddRecordRequest {
    pub name: String,
    /// Integer, or a string holding one.
    #[schema(value_type = i64)]
    pub age: Value,
    pub land: String,
    /// String, or an integer kept as its decimal form.
    #[schema(value_type = String)]
    pub uid: Value,
}

/// Response to a successful JSON submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddRecordResponse {
    pub message: String,
    pub block_index: u64,
    #[schema(value_type = Object)]
    pub record: Record,
}

/// All records for one subject.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub uid: String,
    pub total_records: usize,
    pub records: Vec<IndexedRecord>,
}

/// Build the record router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_record", post(add_record_form))
        .route("/api/add_record", post(api_add_record))
        .route("/get_records", get(get_records))
        .route("/get_history", get(get_history))
        .route("/block/{index}", get(get_block))
}

/// POST /add_record: Append a record from an HTML form.
#[utoipa::path(
    post,
    path = "/add_record",
    request_body(content = AddRecordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Record added; redirect to the ledger view"),
        (status = 400, description = "Missing or invalid field", body = ErrorBody),
    ),
    tag = "records"
)]
async fn add_record_form(
    State(state): State<AppState>,
    form: Result<Form<AddRecordForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let input = extract_record_form(form)?;
    let record = state.chain.append(input)?;
    tracing::info!(index = record.sequence_index, uid = %record.uid, "record added via form");
    Ok(Redirect::to("/view_blockchain"))
}

/// POST /api/add_record: Append a record from a JSON body.
#[utoipa::path(
    post,
    path = "/api/add_record",
    request_body = AddRecordRequest,
    responses(
        (status = 201, description = "Record added", body = AddRecordResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorBody),
    ),
    tag = "records"
)]
async fn api_add_record(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AddRecordResponse>), AppError> {
    let input = extract_record_json(body)?;
    let record = state.chain.append(input)?;
    tracing::info!(index = record.sequence_index, uid = %record.uid, "record added via api");
    Ok((
        StatusCode::CREATED,
        Json(AddRecordResponse {
            message: "Record added successfully".into(),
            block_index: record.sequence_index,
            record,
        }),
    ))
}

/// GET /get_records: First record for a uid.
#[utoipa::path(
    get,
    path = "/get_records",
    params(UidQuery),
    responses(
        (status = 200, description = "First record for the uid", body = IndexedRecord),
        (status = 400, description = "uid missing or malformed query", body = ErrorBody),
        (status = 404, description = "No record for the uid", body = ErrorBody),
    ),
    tag = "records"
)]
async fn get_records(
    State(state): State<AppState>,
    query: Result<Query<UidQuery>, QueryRejection>,
) -> Result<Json<IndexedRecord>, AppError> {
    let uid = extract_query(query)?.uid.unwrap_or_default();
    let record = state.chain.get_by_uid(&uid)?;
    Ok(Json(record.into()))
}

/// GET /get_history: Every record for a uid, oldest first.
#[utoipa::path(
    get,
    path = "/get_history",
    params(UidQuery),
    responses(
        (status = 200, description = "Records for the uid", body = HistoryResponse),
        (status = 400, description = "uid missing or malformed query", body = ErrorBody),
        (status = 404, description = "No records for the uid", body = ErrorBody),
    ),
    tag = "records"
)]
async fn get_history(
    State(state): State<AppState>,
    query: Result<Query<UidQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, AppError> {
    let uid = extract_query(query)?.uid.unwrap_or_default();
    let records: Vec<IndexedRecord> = state
        .chain
        .get_history(&uid)?
        .into_iter()
        .map(IndexedRecord::from)
        .collect();
    Ok(Json(HistoryResponse {
        uid,
        total_records: records.len(),
        records,
    }))
}

/// GET /block/{index}: Record at a ledger position.
#[utoipa::path(
    get,
    path = "/block/{index}",
    params(("index" = u64, Path, description = "Zero-based ledger position")),
    responses(
        (status = 200, description = "Record at the index", body = IndexedRecord),
        (status = 404, description = "Index out of range", body = ErrorBody),
    ),
    tag = "records"
)]
async fn get_block(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<IndexedRecord>, AppError> {
    // Anything that is not a non-negative integer cannot name a block.
    let Ok(index) = raw.parse::<u64>() else {
        return Err(AppError::NotFound(format!(
            "Block index {raw} not found. Total blocks: {}",
            state.chain.len()
        )));
    };
    let record = state.chain.get_by_index(index)?;
    Ok(Json(record.into()))
}
