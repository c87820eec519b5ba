//! Bearer token codec.
//!
//! Decodes the claims segment of the opaque three-part token issued by the
//! backend. The signature is NOT verified here; the server is the source
//! of truth for authorization; the client only derives display and routing
//! state from the payload.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

/// Identity and authorization fields embedded in the token payload.
///
/// Derived state: recomputed from the stored token on demand, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: i64,
    pub tenant_id: i64,
    pub role: String,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Whether the token grants the admin role for its tenant.
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

/// Decode the claims payload of a token.
///
/// Returns `None` for anything other than a well-formed three-segment token
/// with a base64url-encoded JSON payload. Never panics.
pub fn decode(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = decode_segment(parts[1])?;
    serde_json::from_slice(&payload).ok()
}

/// Base64url-decode a token segment, accepting both padded and unpadded forms.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .ok()
}

/// Whether a token is expired relative to the current wall clock.
///
/// Undecodable tokens and tokens without an `exp` claim count as expired.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_ms())
}

/// Expiry check against an explicit timestamp in milliseconds.
pub fn is_expired_at(token: &str, now_ms: f64) -> bool {
    match decode(token) {
        // `exp` is in seconds, `now_ms` in milliseconds.
        Some(Claims { exp: Some(exp), .. }) => (exp as f64) * 1000.0 < now_ms,
        _ => true,
    }
}

/// Current wall clock in milliseconds since the epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}
