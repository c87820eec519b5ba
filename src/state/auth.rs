//! Authentication state and session lifecycle.
//!
//! The signal holds `{user, loading}` for the whole app lifetime and is
//! mutated only by [`init`] (startup hydration from storage), [`login`],
//! [`register`], and [`logout`]. Concurrent login/register calls are not
//! mutually excluded: last write to the signal wins; forms disable their
//! submit control while a call is in flight as the sole guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::auth_api;
use crate::net::http::ApiError;
use crate::util::session;
use crate::util::token::Claims;

/// Authentication state tracking the current user and loading status.
///
/// Invariant: `user` is present iff a non-expired token existed in storage
/// at the last check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Claims>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Loading until the startup storage check has run.
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State after the storage check resolved.
    pub fn resolved(user: Option<Claims>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Claims::is_admin)
    }
}

/// Initialize the session from storage. Runs once at startup; subsequent
/// token expiry is handled via 401 responses.
pub fn init(auth: RwSignal<AuthState>) {
    auth.set(AuthState::resolved(session::current_user()));
}

/// Log in, persist the returned token, and recompute the user from storage.
pub async fn login(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let token = auth_api::login(email, password).await?;
    session::save(&token);
    auth.set(AuthState::resolved(session::current_user()));
    Ok(())
}

/// Register, persist the returned token, and recompute the user from storage.
pub async fn register(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
    invite_code: Option<&str>,
) -> Result<(), ApiError> {
    let token = auth_api::register(email, password, invite_code).await?;
    session::save(&token);
    auth.set(AuthState::resolved(session::current_user()));
    Ok(())
}

/// Clear the stored token and the current user.
pub fn logout(auth: RwSignal<AuthState>) {
    session::clear();
    auth.set(AuthState::resolved(None));
}
