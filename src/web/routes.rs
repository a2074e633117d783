//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    index_handler, index_post_handler, shorten_handler, shorten_method_not_allowed,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /`        - URL submission form
/// - `POST /`        - 303 redirect to `/shorten`
/// - `*    /`        - URL submission form for any other method
/// - `POST /shorten` - Create a short link and render the confirmation page
/// - `*    /shorten` - 405 for any other method
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(index_handler)
                .post(index_post_handler)
                .fallback(index_handler),
        )
        .route(
            "/shorten",
            post(shorten_handler).fallback(shorten_method_not_allowed),
        )
}
