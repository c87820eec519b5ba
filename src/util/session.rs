//! Durable session storage for the bearer token.
//!
//! Persists the token in `localStorage` under a single fixed key. Requires
//! a browser environment: on the server side `load` always reports an
//! absent token and the write operations are no-ops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::token::{self, Claims};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "notes_jwt";

/// Store the bearer token.
pub fn save(credential: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, credential);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
    }
}

/// Retrieve the stored bearer token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored bearer token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Outcome of resolving a stored token into a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// No token in storage.
    Missing,
    /// A token exists but is expired or undecodable; storage must be cleared.
    Stale,
    /// A live token with its decoded claims.
    Valid(Claims),
}

/// Classify a loaded token against a clock. Pure seam for `current_user`.
pub(crate) fn resolve(credential: Option<&str>, now_ms: f64) -> Resolution {
    let Some(credential) = credential else {
        return Resolution::Missing;
    };
    if token::is_expired_at(credential, now_ms) {
        return Resolution::Stale;
    }
    match token::decode(credential) {
        Some(claims) => Resolution::Valid(claims),
        None => Resolution::Stale,
    }
}

/// Derive the current user from storage.
///
/// Expired or undecodable tokens are cleared from storage and reported as
/// an absent user; subsequent expiry is handled via 401 responses.
pub fn current_user() -> Option<Claims> {
    match resolve(load().as_deref(), token::now_ms()) {
        Resolution::Missing => None,
        Resolution::Stale => {
            clear();
            None
        }
        Resolution::Valid(claims) => Some(claims),
    }
}
