//! Top-level router configuration combining page and redirect routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - URL submission form
//! - `POST /`          - 303 redirect to `/shorten`
//! - `POST /shorten`   - Create a short link (405 for other methods)
//! - `GET  /s/{key}`   - Short link redirect with visit counting
//! - `GET  /health`    - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (`/s/` → `/s`)

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
