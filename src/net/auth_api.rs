//! Authentication API client.
//!
//! Both endpoints return the bearer token as `text/plain` rather than JSON.

use crate::net::http::{self, ApiError};

/// `POST /auth/login`. Returns the raw bearer token.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let body = serde_json::json!({
        "email": email,
        "password": password,
    });
    http::request_text("POST", "/auth/login", Some(&body)).await
}

/// `POST /auth/register`. Returns the raw bearer token.
///
/// The `inviteCode` field is only sent when a non-empty code was entered;
/// registering without one starts a fresh tenant.
pub async fn register(
    email: &str,
    password: &str,
    invite_code: Option<&str>,
) -> Result<String, ApiError> {
    let mut body = serde_json::json!({
        "email": email,
        "password": password,
    });
    if let Some(code) = invite_code.filter(|c| !c.trim().is_empty()) {
        body["inviteCode"] = serde_json::Value::String(code.to_owned());
    }
    http::request_text("POST", "/auth/register", Some(&body)).await
}
