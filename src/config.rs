//! API base URL configuration.
//!
//! The base URL is baked in at compile time from `NOTES_API_BASE_URL`.
//! A missing value is a startup warning, not a fatal error: requests then
//! use relative URLs, which only works when the app is served behind the
//! same origin as the API.

/// Base URL prefix for all API requests, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("NOTES_API_BASE_URL").unwrap_or("")
}

/// Whether an explicit base URL was configured at build time.
pub fn is_configured() -> bool {
    option_env!("NOTES_API_BASE_URL").is_some()
}

/// Join the configured base URL with an endpoint path.
pub fn url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

/// Log a startup warning when no base URL is configured.
pub fn warn_if_unconfigured() {
    if !is_configured() {
        leptos::logging::warn!(
            "NOTES_API_BASE_URL is not set; API requests will use relative URLs"
        );
    }
}
