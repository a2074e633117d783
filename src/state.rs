//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Base URL short links are published under, e.g. `https://sho.rt`.
    pub website_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, website_url: impl Into<String>) -> Self {
        Self {
            link_service,
            website_url: website_url.into(),
        }
    }
}
