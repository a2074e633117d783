//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /s/{key}`
///
/// # Request Flow
///
/// 1. Look up the link by key
/// 2. Increment its visit counter
/// 3. Return 302 Found with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the key doesn't exist.
/// Returns 500 Internal Server Error on database failures, or if the stored
/// URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve_and_count(&key).await?;

    let location = HeaderValue::from_str(&link.url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid header value",
            json!({ "key": key, "cause": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Handles `/s` and `/s/` requests that carry no key.
///
/// # Endpoint
///
/// `GET /s` → 400 Bad Request
pub async fn missing_key_handler() -> AppError {
    AppError::bad_request("Shortened key is missing", json!({ "field": "key" }))
}
