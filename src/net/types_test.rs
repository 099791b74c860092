use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_parses_backend_shape() {
    let raw = r#"{
        "username": "alice",
        "firstName": "Alice",
        "lastName": "Liddell",
        "email": "alice@example.com",
        "isAdmin": false,
        "applications": [3, 1, 3]
    }"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.first_name, "Alice");
    assert_eq!(profile.applications.into_iter().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn user_profile_defaults_missing_admin_and_applications() {
    let raw = r#"{"username":"bob","firstName":"Bob","lastName":"B","email":"b@example.com"}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert!(!profile.is_admin);
    assert!(profile.applications.is_empty());
}

#[test]
fn user_response_unwraps_user_envelope() {
    let raw = r#"{"user":{"username":"carol","firstName":"C","lastName":"D","email":"c@example.com","isAdmin":true}}"#;
    let body: UserResponse = serde_json::from_str(raw).unwrap();
    assert!(body.user.is_admin);
}

// =============================================================
// Inputs
// =============================================================

#[test]
fn signup_input_serializes_camel_case() {
    let input = SignupInput {
        username: "dave".to_owned(),
        password: "hunter2".to_owned(),
        first_name: "Dave".to_owned(),
        last_name: "Doe".to_owned(),
        email: "dave@example.com".to_owned(),
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["firstName"], "Dave");
    assert_eq!(json["lastName"], "Doe");
    assert_eq!(json["password"], "hunter2");
}

#[test]
fn inputs_redact_password_in_debug() {
    let signup = SignupInput {
        username: "dave".to_owned(),
        password: "hunter2".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
    };
    let login = LoginInput { username: "dave".to_owned(), password: "hunter2".to_owned() };
    assert!(!format!("{signup:?}").contains("hunter2"));
    assert!(!format!("{login:?}").contains("hunter2"));
    assert!(format!("{login:?}").contains("dave"));
}

#[test]
fn token_response_parses_token() {
    let body: TokenResponse = serde_json::from_str(r#"{"token":"a.b.c"}"#).unwrap();
    assert_eq!(body.token.as_str(), "a.b.c");
}
