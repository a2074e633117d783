//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::key_generator::{KeyGenerator, is_valid_key};
use crate::utils::url_validator::{normalize_input, reject_control_chars, validate_http_url};
use serde_json::json;

/// Maximum number of insert attempts before giving up on key allocation.
pub const MAX_KEY_ATTEMPTS: usize = 10;

/// Service for creating short links and resolving them for redirects.
///
/// Generic over the repository so unit tests can use a mock; the HTTP state
/// stores it as `LinkService<dyn LinkRepository>`.
pub struct LinkService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    key_generator: KeyGenerator,
    require_http_url: bool,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service with an OS-seeded key generator.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_key_generator(link_repository, KeyGenerator::new())
    }

    /// Creates a new link service using the given key generator.
    pub fn with_key_generator(link_repository: Arc<L>, key_generator: KeyGenerator) -> Self {
        Self {
            link_repository,
            key_generator,
            require_http_url: false,
        }
    }

    /// Enables or disables strict `http`/`https` URL validation.
    pub fn require_http_url(mut self, enabled: bool) -> Self {
        self.require_http_url = enabled;
        self
    }

    /// Creates a short link for `url`.
    ///
    /// # Key Allocation
    ///
    /// A fresh key is generated and inserted directly. If the insert hits the
    /// primary key, a new key is generated and the insert is retried, up to
    /// [`MAX_KEY_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank, contains control
    /// characters, or is malformed while strict validation is enabled.
    ///
    /// Returns [`AppError::Internal`] on database errors or when every
    /// attempt collided.
    pub async fn shorten(&self, url: &str) -> Result<Link, AppError> {
        let url = normalize_input(url).ok_or_else(|| {
            AppError::bad_request("URL parameter is missing", json!({ "field": "url" }))
        })?;

        // Stored URLs become a Location header on redirect.
        reject_control_chars(url).map_err(|reason| {
            AppError::bad_request("Invalid URL format", json!({ "reason": reason }))
        })?;

        if self.require_http_url {
            validate_http_url(url).map_err(|reason| {
                AppError::bad_request("Invalid URL format", json!({ "reason": reason }))
            })?;
        }

        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let new_link = NewLink {
                id: self.key_generator.generate(),
                url: url.to_string(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(key = %link.id, attempt, "Created short link");
                    return Ok(link);
                }
                Err(AppError::Conflict { details, .. }) => {
                    tracing::warn!(attempt, %details, "Short key collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique key",
            json!({ "attempts": MAX_KEY_ATTEMPTS }),
        ))
    }

    /// Resolves a short key for a redirect and records the visit.
    ///
    /// Returns the link as it was before the visit was counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `key` is empty.
    /// Returns [`AppError::NotFound`] if no link has this key.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_and_count(&self, key: &str) -> Result<Link, AppError> {
        if key.is_empty() {
            return Err(AppError::bad_request(
                "Shortened key is missing",
                json!({ "field": "key" }),
            ));
        }

        let not_found = || AppError::not_found("Shortened key not found", json!({ "key": key }));

        // Malformed keys cannot exist; skip the database round-trip.
        if !is_valid_key(key) {
            return Err(not_found());
        }

        let link = self
            .link_repository
            .find_by_id(key)
            .await?
            .ok_or_else(not_found)?;

        if !self.link_repository.increment_count(key).await? {
            tracing::warn!(key, "Link disappeared before visit was counted");
        }

        tracing::debug!(key, count = link.count + 1, "Recorded visit");

        Ok(link)
    }

    /// Counts stored links.
    pub async fn total_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}

/// Builds the public short URL for `key` under `base_url`.
pub fn short_url(base_url: &str, key: &str) -> String {
    format!("{}/s/{}", base_url.trim_end_matches('/'), key)
}
