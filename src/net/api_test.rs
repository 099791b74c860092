use super::*;
use crate::util::credential_store::MemoryCredentialStore;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn token_endpoint_formats_expected_path() {
    assert_eq!(token_endpoint("http://localhost:3001"), "http://localhost:3001/auth/token");
}

#[test]
fn register_endpoint_formats_expected_path() {
    assert_eq!(register_endpoint("http://api.test"), "http://api.test/auth/register");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("http://api.test", "alice"), "http://api.test/users/alice");
}

#[test]
fn apply_endpoint_formats_expected_path() {
    assert_eq!(apply_endpoint("http://api.test", "alice", 42), "http://api.test/users/alice/jobs/42");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header(&Token::new("a.b.c")), "Bearer a.b.c");
}

// =============================================================
// HttpApi outside the browser
// =============================================================

#[test]
fn http_api_keeps_base_url() {
    let api = HttpApi::new("http://api.test", MemoryCredentialStore::default());
    assert_eq!(api.base_url(), "http://api.test");
}

#[test]
fn http_api_fails_as_network_error_off_browser() {
    let api = HttpApi::new("http://api.test", MemoryCredentialStore::default());
    let err = futures::executor::block_on(api.authenticate("alice", "pw")).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    let err = futures::executor::block_on(api.fetch_profile("alice")).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
