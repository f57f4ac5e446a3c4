//! Shared validation helpers for provider configuration

use url::Url;

/// Check that a provider base URL is a usable http(s) URL
///
/// # Errors
///
/// Returns an error if the URL is empty, unparsable or not http(s).
pub fn validate_base_url(base_url: &str) -> Result<(), String> {
    if base_url.is_empty() {
        return Err("base_url must not be empty".to_string());
    }

    let parsed = Url::parse(base_url).map_err(|e| format!("base_url is invalid: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("base_url must be http or https, got {}", parsed.scheme()));
    }

    Ok(())
}
