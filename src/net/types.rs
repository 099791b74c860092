//! Wire DTOs shared with the job-board backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Inputs carrying a password redact it from `Debug` output.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::token::Token;

/// Backend job identifier.
pub type JobId = u32;

/// Full user profile as returned by `GET /users/{username}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Jobs this user has applied to.
    #[serde(default)]
    pub applications: BTreeSet<JobId>,
}

/// Registration payload for `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl fmt::Debug for SignupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish()
    }
}

/// Credentials payload for `POST /auth/token`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `{"token": "..."}` body returned by both auth endpoints.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: Token,
}

/// `{"user": {...}}` body returned by the profile endpoint.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: UserProfile,
}

/// `{"applied": id}` body returned by the apply endpoint.
#[derive(Debug, Deserialize)]
pub struct AppliedResponse {
    pub applied: JobId,
}
