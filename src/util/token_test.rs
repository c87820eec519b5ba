use super::*;

fn encode_token(payload: &serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("eyJhbGciOiJIUzI1NiJ9.{body}.c2ln")
}

fn claims_json(exp: i64) -> serde_json::Value {
    serde_json::json!({
        "userId": 7,
        "tenantId": 1,
        "role": "ADMIN",
        "exp": exp,
    })
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_well_formed_token() {
    let token = encode_token(&claims_json(1_900_000_000));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.user_id, 7);
    assert_eq!(claims.tenant_id, 1);
    assert_eq!(claims.role, "ADMIN");
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn decode_ignores_unknown_payload_fields() {
    let token = encode_token(&serde_json::json!({
        "userId": 2,
        "tenantId": 3,
        "role": "MEMBER",
        "exp": 123,
        "iat": 100,
        "sub": "someone",
    }));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.user_id, 2);
    assert!(!claims.is_admin());
}

#[test]
fn decode_accepts_padded_payload() {
    let body = URL_SAFE.encode(serde_json::to_vec(&claims_json(42)).unwrap());
    let token = format!("h.{body}.s");
    assert!(decode(&token).is_some());
}

#[test]
fn decode_missing_exp_yields_none_exp() {
    let token = encode_token(&serde_json::json!({
        "userId": 1,
        "tenantId": 1,
        "role": "MEMBER",
    }));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.exp, None);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims_json(1)).unwrap());
    assert!(decode(&body).is_none());
    assert!(decode(&format!("h.{body}")).is_none());
    assert!(decode(&format!("h.{body}.s.extra")).is_none());
    assert!(decode("").is_none());
}

#[test]
fn decode_rejects_unparsable_payload() {
    let body = URL_SAFE_NO_PAD.encode(b"not json");
    assert!(decode(&format!("h.{body}.s")).is_none());
    assert!(decode("h.!!!not-base64!!!.s").is_none());
}

// =============================================================
// is_expired_at
// =============================================================

#[test]
fn token_with_past_exp_is_expired() {
    let token = encode_token(&claims_json(1_000));
    assert!(is_expired_at(&token, 1_001.0 * 1000.0));
}

#[test]
fn token_with_future_exp_is_live() {
    let token = encode_token(&claims_json(2_000));
    assert!(!is_expired_at(&token, 1_999.0 * 1000.0));
}

#[test]
fn token_without_exp_is_expired() {
    let token = encode_token(&serde_json::json!({
        "userId": 1,
        "tenantId": 1,
        "role": "MEMBER",
    }));
    assert!(is_expired_at(&token, 0.0));
}

#[test]
fn malformed_token_is_expired() {
    assert!(is_expired_at("garbage", 0.0));
}

// =============================================================
// Claims::is_admin
// =============================================================

#[test]
fn admin_role_is_admin() {
    let claims = decode(&encode_token(&claims_json(1))).unwrap();
    assert!(claims.is_admin());
}

#[test]
fn role_comparison_is_case_sensitive() {
    let token = encode_token(&serde_json::json!({
        "userId": 1,
        "tenantId": 1,
        "role": "admin",
        "exp": 1,
    }));
    assert!(!decode(&token).unwrap().is_admin());
}
