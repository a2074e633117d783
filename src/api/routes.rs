//! Redirect and health route configuration.

use crate::api::handlers::{health_handler, missing_key_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes serving redirects and the health report.
///
/// # Endpoints
///
/// - `GET /s/{key}` - Redirect to the stored URL and count the visit
/// - `GET /s`       - 400, key missing
/// - `GET /health`  - Database health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/s/{*key}", get(redirect_handler))
        .route("/s", get(missing_key_handler))
        .route("/health", get(health_handler))
}
