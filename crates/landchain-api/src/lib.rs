//! # landchain-api: HTTP Surface for the Record Ledger
//!
//! Thin Axum layer over [`landchain_core::HashChain`]. Handlers parse and
//! shape requests; every ledger rule lives in the core crate.
//!
//! ## Routes
//!
//! - `POST /add_record`, `POST /api/add_record`: append
//! - `GET /get_records`, `GET /get_history`, `GET /block/{index}`: lookup
//! - `GET /view_blockchain`, `GET /api/blockchain`: full snapshot
//! - `GET /stats`, `GET /verify`: summary and integrity scan
//! - `POST /clear_blockchain`: reset (admin token when configured)
//! - `GET /openapi.json`: generated OpenAPI document
//! - `/health/*`: liveness and readiness probes
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer on everything; the admin bearer check only on the reset route.

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.admin_token.clone(),
    };

    let admin = routes::chain::admin_router()
        .layer(from_fn(auth::admin_auth_middleware))
        .layer(axum::Extension(auth_config));

    let api = Router::new()
        .route("/", get(index))
        .merge(routes::records::router())
        .merge(routes::chain::router())
        .merge(admin)
        .merge(openapi::router())
        .with_state(state);

    // Unauthenticated health probes.
    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(TraceLayer::new_for_http())
}

/// Service index returned at `/`.
#[derive(Debug, Serialize)]
struct ServiceIndex {
    service: &'static str,
    version: &'static str,
    endpoints: &'static [&'static str],
}

/// GET /: Name the service and list its endpoints.
async fn index() -> Json<ServiceIndex> {
    Json(ServiceIndex {
        service: "landchain",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: &[
            "POST /add_record",
            "POST /api/add_record",
            "GET /get_records?uid=",
            "GET /get_history?uid=",
            "GET /block/{index}",
            "GET /view_blockchain",
            "GET /api/blockchain",
            "GET /stats",
            "GET /verify",
            "POST /clear_blockchain",
            "GET /openapi.json",
        ],
    })
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
