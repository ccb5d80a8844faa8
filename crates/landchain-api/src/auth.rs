//! # Admin Authentication Middleware
//!
//! Bearer token check guarding destructive endpoints (`/clear_blockchain`).
//! Read endpoints and record submission stay open.
//!
//! ```text
//! Authorization: Bearer {ADMIN_TOKEN}
//! ```
//!
//! When no token is configured the middleware passes every request through,
//! which keeps local development and the test suite credential-free.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Auth configuration injected into request extensions.
///
/// Custom `Debug` redacts the token value to prevent credential leakage in logs.
#[derive(Clone, Default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Constant-time comparison of bearer tokens.
///
/// When lengths differ, performs a dummy comparison so timing does not
/// depend on where the inputs diverge.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Check the `Authorization` header against the configured admin token.
fn check_admin(request: &Request, expected: &str) -> Result<(), AppError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing authorization header".into()))?;

    let provided = header_value.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("authorization header must use Bearer scheme".into())
    })?;

    if constant_time_token_eq(provided, expected) {
        Ok(())
    } else {
        Err(AppError::Unauthorized("invalid bearer token".into()))
    }
}

/// Reject requests that do not carry the admin bearer token.
///
/// Expects an [`AuthConfig`] extension layered outside this middleware.
pub async fn admin_auth_middleware(request: Request, next: Next) -> Response {
    let expected = request
        .extensions()
        .get::<AuthConfig>()
        .and_then(|c| c.token.clone());

    let Some(expected) = expected else {
        return next.run(request).await;
    };

    match check_admin(&request, &expected) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!(
                path = %request.uri().path(),
                reason = %err,
                "admin authentication failed"
            );
            err.into_response()
        }
    }
}
