//! Common helpers for sentiment providers
//!
//! Shared constructor patterns so every provider normalizes its inputs the
//! same way.

use std::time::Duration;

/// Common constructor patterns used by sentiment providers
pub mod constructor {
    /// Normalize an API key (strip accidental whitespace from env vars)
    pub fn normalize_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Normalize an optional base URL
    pub fn normalize_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().to_string())
    }

    /// Get effective URL with fallback to the provider default
    pub fn effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_url.to_string())
    }
}

/// Default timeout for sentiment API requests
pub const DEFAULT_SENTIMENT_TIMEOUT: Duration = Duration::from_secs(30);
