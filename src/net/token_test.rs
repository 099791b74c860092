use super::*;

fn segment(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

fn jwt(payload_json: &str) -> Token {
    Token::new(format!("{}.{}.signature", segment(r#"{"alg":"HS256","typ":"JWT"}"#), segment(payload_json)))
}

// =============================================================
// decode: well-formed tokens
// =============================================================

#[test]
fn decode_reads_username_and_admin_flag() {
    let claim = decode(&jwt(r#"{"username":"alice","isAdmin":true,"iat":1700000000}"#)).unwrap();
    assert_eq!(
        claim,
        IdentityClaim { username: "alice".to_owned(), is_admin: true, iat: Some(1_700_000_000) }
    );
}

#[test]
fn decode_defaults_optional_fields() {
    let claim = decode(&jwt(r#"{"username":"bob"}"#)).unwrap();
    assert_eq!(claim.username, "bob");
    assert!(!claim.is_admin);
    assert_eq!(claim.iat, None);
}

#[test]
fn decode_tolerates_padded_payload() {
    let padded = format!("h.{}==.s", segment(r#"{"username":"al"}"#));
    assert_eq!(decode(&Token::new(padded)).unwrap().username, "al");
}

#[test]
fn decode_ignores_signature_contents() {
    let token = Token::new(format!("x.{}.not-a-real-signature", segment(r#"{"username":"carol"}"#)));
    assert_eq!(decode(&token).unwrap().username, "carol");
}

// =============================================================
// decode: malformed tokens
// =============================================================

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode(&Token::new("abc")), Err(MalformedTokenError::SegmentCount(1)));
    assert_eq!(decode(&Token::new("a.b")), Err(MalformedTokenError::SegmentCount(2)));
    assert_eq!(decode(&Token::new("a.b.c.d")), Err(MalformedTokenError::SegmentCount(4)));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode(&Token::new("a.!!!.c")), Err(MalformedTokenError::Encoding(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let token = Token::new(format!("a.{}.c", segment("not json")));
    assert!(matches!(decode(&token), Err(MalformedTokenError::Claim(_))));
}

#[test]
fn decode_rejects_claim_without_username() {
    assert!(matches!(decode(&jwt(r#"{"sub":"alice"}"#)), Err(MalformedTokenError::Claim(_))));
}

#[test]
fn decode_rejects_blank_username() {
    assert!(matches!(decode(&jwt(r#"{"username":"  "}"#)), Err(MalformedTokenError::Claim(_))));
}

// =============================================================
// Token
// =============================================================

#[test]
fn token_debug_does_not_leak_contents() {
    let token = Token::new("secret.secret.secret");
    let rendered = format!("{token:?}");
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("20 bytes"));
}

#[test]
fn token_blank_is_empty() {
    assert!(Token::new("").is_empty());
    assert!(Token::new("   ").is_empty());
    assert!(!Token::new("a.b.c").is_empty());
}
