//! Handler for the form-based shortening endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::application::services::short_url;
use crate::error::AppError;
use crate::state::AppState;

/// Form body submitted by the landing page.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL parameter is missing"))]
    pub url: String,
}

/// Confirmation page for a freshly created short link.
///
/// Renders `templates/shortened.html`. Both values are HTML-escaped by askama.
#[derive(Template, WebTemplate)]
#[template(path = "shortened.html")]
pub struct ShortenedTemplate {
    pub original_url: String,
    pub short_url: String,
}

/// Creates a short link from a submitted form and renders the result.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`, field `url`)
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing, not form-encoded, or the
/// `url` field is empty.
/// Returns 500 Internal Server Error on database failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<ShortenedTemplate, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::bad_request(
            "URL parameter is missing",
            json!({ "rejection": rejection.body_text() }),
        )
    })?;

    form.validate()?;

    let link = state.link_service.shorten(&form.url).await?;

    Ok(ShortenedTemplate {
        short_url: short_url(&state.website_url, &link.id),
        original_url: link.url,
    })
}

/// Rejects every method except POST on `/shorten`.
pub async fn shorten_method_not_allowed() -> AppError {
    AppError::method_not_allowed("Invalid request method", json!({ "allowed": "POST" }))
}
