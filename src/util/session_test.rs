use super::*;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with_exp(exp: i64) -> String {
    let body = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(&serde_json::json!({
            "userId": 9,
            "tenantId": 4,
            "role": "MEMBER",
            "exp": exp,
        }))
        .unwrap(),
    );
    format!("h.{body}.s")
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_missing_token() {
    assert_eq!(resolve(None, 0.0), Resolution::Missing);
}

#[test]
fn resolve_expired_token_is_stale() {
    let token = token_with_exp(100);
    assert_eq!(resolve(Some(&token), 200.0 * 1000.0), Resolution::Stale);
}

#[test]
fn resolve_undecodable_token_is_stale() {
    assert_eq!(resolve(Some("not-a-token"), 0.0), Resolution::Stale);
}

#[test]
fn resolve_live_token_yields_claims() {
    let token = token_with_exp(1_000);
    match resolve(Some(&token), 500.0 * 1000.0) {
        Resolution::Valid(claims) => {
            assert_eq!(claims.user_id, 9);
            assert_eq!(claims.tenant_id, 4);
            assert_eq!(claims.exp, Some(1_000));
        }
        other => panic!("expected Valid, got {other:?}"),
    }
}
