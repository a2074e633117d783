//! Link entity representing a shortened URL mapping.

/// A persisted short link.
///
/// Maps a 6-character short key to the original URL and tracks how many
/// times the short link has been followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: String, url: String, count: i64) -> Self {
        Self { id, url, count }
    }
}

/// Input data for creating a new link.
///
/// The visit counter is not part of the input; it always starts at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: String,
    pub url: String,
}
