use super::*;

fn claims(role: &str) -> Claims {
    Claims {
        user_id: 1,
        tenant_id: 1,
        role: role.to_owned(),
        exp: Some(1_900_000_000),
    }
}

// =============================================================
// AuthState defaults and transitions
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_clears_loading() {
    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(state.user.is_none());

    let state = AuthState::resolved(Some(claims("MEMBER")));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn admin_claims_set_is_admin() {
    let state = AuthState::resolved(Some(claims("ADMIN")));
    assert!(state.is_authenticated());
    assert!(state.is_admin());
}

#[test]
fn member_claims_are_not_admin() {
    let state = AuthState::resolved(Some(claims("MEMBER")));
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn absent_user_is_not_admin() {
    assert!(!AuthState::resolved(None).is_admin());
}
