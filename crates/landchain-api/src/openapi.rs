//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the admin bearer token scheme used by `/clear_blockchain`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Admin token. Set via the ADMIN_TOKEN env var."))
                        .build(),
                ),
            );
        }
    }
}

/// Assembled OpenAPI spec for the ledger service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Landchain API",
        version = "0.1.0",
        description = "Append-only, hash-linked land record ledger.\n\nRecords are sealed with a SHA-256 digest that commits to their fields and to the previous record. `/verify` rescans the whole ledger and reports every hash mismatch or broken link.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::records::add_record_form,
        crate::routes::records::api_add_record,
        crate::routes::records::get_records,
        crate::routes::records::get_history,
        crate::routes::records::get_block,
        crate::routes::chain::view_blockchain,
        crate::routes::chain::api_blockchain,
        crate::routes::chain::stats,
        crate::routes::chain::verify,
        crate::routes::chain::clear_blockchain,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::extractors::AddRecordForm,
        crate::routes::IndexedRecord,
        crate::routes::records::AddRecordRequest,
        crate::routes::records::AddRecordResponse,
        crate::routes::records::HistoryResponse,
        crate::routes::chain::BlockchainResponse,
        landchain_core::StatsSummary,
        landchain_core::VerificationDetail,
        landchain_core::VerificationSummary,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "records", description = "Record submission and lookup"),
        (name = "ledger", description = "Whole-ledger views, statistics and verification"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Landchain API");
        assert_eq!(spec.info.version, "0.1.0");
    }

    #[test]
    fn spec_lists_every_route() {
        let spec = ApiDoc::openapi();
        for path in [
            "/add_record",
            "/api/add_record",
            "/get_records",
            "/get_history",
            "/block/{index}",
            "/view_blockchain",
            "/api/blockchain",
            "/stats",
            "/verify",
            "/clear_blockchain",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn spec_has_bearer_scheme() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
