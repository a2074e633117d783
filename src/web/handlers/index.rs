//! Landing page with the URL submission form.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect};

/// Template for the landing page.
///
/// Renders `templates/index.html`: a single `url` field posting to `/shorten`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the URL submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// Sends form posts aimed at the landing page on to the shorten endpoint.
///
/// # Endpoint
///
/// `POST /` → `303 See Other`, `Location: /shorten`
pub async fn index_post_handler() -> Redirect {
    Redirect::to("/shorten")
}
