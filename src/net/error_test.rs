use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn unauthorized_maps_to_invalid_credentials() {
    let body = r#"{"error":{"message":"Invalid username/password","status":401}}"#;
    assert_eq!(ApiError::from_response(401, body), ApiError::InvalidCredentials);
}

#[test]
fn not_found_keeps_backend_message() {
    let body = r#"{"error":{"message":"No user: ghost","status":404}}"#;
    assert_eq!(ApiError::from_response(404, body), ApiError::NotFound("No user: ghost".to_owned()));
}

#[test]
fn duplicate_username_bad_request_maps_to_conflict() {
    let body = r#"{"error":{"message":"Duplicate username: alice","status":400}}"#;
    assert_eq!(
        ApiError::from_response(400, body),
        ApiError::Conflict("Duplicate username: alice".to_owned())
    );
}

#[test]
fn conflict_status_maps_to_conflict() {
    assert!(matches!(ApiError::from_response(409, ""), ApiError::Conflict(_)));
}

#[test]
fn schema_errors_map_to_validation_lines() {
    let body = r#"{"error":{"message":["instance.email does not conform to the \"email\" format","instance requires property \"password\""],"status":400}}"#;
    let err = ApiError::from_response(400, body);
    let ApiError::Validation(lines) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(lines.len(), 2);
    assert!(err.to_string().contains("; "));
}

#[test]
fn bad_request_without_body_still_has_a_message() {
    assert_eq!(
        ApiError::from_response(400, "not json"),
        ApiError::Validation(vec!["request failed: 400".to_owned()])
    );
}

#[test]
fn server_error_maps_to_network_with_status() {
    let err = ApiError::from_response(503, "");
    assert_eq!(err, ApiError::Network("503: request failed: 503".to_owned()));
}

// =============================================================
// Display
// =============================================================

#[test]
fn every_variant_renders_a_non_empty_message() {
    let all = [
        ApiError::InvalidCredentials,
        ApiError::NotFound("x".to_owned()),
        ApiError::Conflict("x".to_owned()),
        ApiError::Validation(vec!["x".to_owned()]),
        ApiError::network("offline"),
    ];
    for err in all {
        assert!(!err.to_string().is_empty());
    }
}
