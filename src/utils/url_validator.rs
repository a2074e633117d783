//! Input checks for URLs submitted for shortening.

use url::Url;

/// Trims surrounding whitespace and returns `None` for blank input.
pub fn normalize_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Rejects input containing control characters, which cannot be sent back in
/// a `Location` header.
///
/// # Errors
///
/// Returns a short reason when a control character is found.
pub fn reject_control_chars(raw: &str) -> Result<(), &'static str> {
    if raw.chars().any(char::is_control) {
        return Err("URL contains control characters");
    }
    Ok(())
}

/// Checks that `raw` is an absolute `http` or `https` URL with a host.
///
/// # Errors
///
/// Returns a short reason when the URL is rejected.
pub fn validate_http_url(raw: &str) -> Result<(), &'static str> {
    let parsed = Url::parse(raw).map_err(|_| "URL could not be parsed")?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err("Only http and https URLs are allowed");
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err("URL must have a host");
    }

    Ok(())
}
