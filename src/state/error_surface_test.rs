use super::*;

// =============================================================
// ErrorSurface
// =============================================================

#[test]
fn error_surface_default_is_empty() {
    assert_eq!(ErrorSurface::default().get(), None);
}

#[test]
fn error_surface_holds_latest_error_only() {
    let mut surface = ErrorSurface::default();
    surface.set(ApiError::InvalidCredentials.into());
    surface.set(ApiError::Conflict("Duplicate username: alice".to_owned()).into());
    let current = surface.get().unwrap();
    assert_eq!(current.cause, SessionFailure::Api(ApiError::Conflict("Duplicate username: alice".to_owned())));
}

#[test]
fn error_surface_clear_resets() {
    let mut surface = ErrorSurface::default();
    surface.set(ApiError::InvalidCredentials.into());
    surface.clear();
    assert_eq!(surface.get(), None);
}

// =============================================================
// SessionError
// =============================================================

#[test]
fn session_error_message_comes_from_cause() {
    let err = SessionError::from(ApiError::InvalidCredentials);
    assert_eq!(err.message, "invalid username/password");
    assert_eq!(err.to_string(), err.message);
}

#[test]
fn session_error_exposes_source() {
    use std::error::Error as _;
    let err = SessionError::from(SessionFailure::NotLoggedIn);
    assert!(err.source().is_some());
}

#[test]
fn malformed_token_converts_to_failure() {
    let failure = SessionFailure::from(MalformedTokenError::SegmentCount(1));
    assert!(failure.to_string().contains("3 dot-separated segments"));
}

#[test]
fn superseded_is_detected() {
    assert!(SessionError::from(SessionFailure::Superseded).is_superseded());
    assert!(!SessionError::from(ApiError::InvalidCredentials).is_superseded());
}

#[test]
fn identity_mismatch_names_both_users() {
    let failure = SessionFailure::IdentityMismatch { expected: "alice".to_owned(), found: "mallory".to_owned() };
    let text = failure.to_string();
    assert!(text.contains("alice") && text.contains("mallory"));
}
