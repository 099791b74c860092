//! Bearer token newtype and local claim decoding.
//!
//! DESIGN
//! ======
//! The backend issues JWTs and is the only party that checks signatures or
//! expiry. The client only needs the embedded username to drive a profile
//! fetch, so [`decode`] reads the payload segment and nothing else. It is
//! pure and synchronous.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Opaque bearer credential issued by the job-board backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// Never print credential material.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(<{} bytes>)", self.0.len())
    }
}

/// Identity data embedded in a token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdentityClaim {
    pub username: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default)]
    pub iat: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedTokenError {
    #[error("token must have 3 dot-separated segments, found {0}")]
    SegmentCount(usize),
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not an identity claim: {0}")]
    Claim(String),
}

/// Decode the identity claim from `token` without verifying it.
///
/// # Errors
///
/// Returns [`MalformedTokenError`] if the token is not a three-segment JWT,
/// the payload is not base64url JSON, or the claim has no username.
pub fn decode(token: &Token) -> Result<IdentityClaim, MalformedTokenError> {
    let segments: Vec<&str> = token.as_str().trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(MalformedTokenError::SegmentCount(segments.len()));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| MalformedTokenError::Encoding(e.to_string()))?;
    let claim: IdentityClaim =
        serde_json::from_slice(&bytes).map_err(|e| MalformedTokenError::Claim(e.to_string()))?;

    if claim.username.trim().is_empty() {
        return Err(MalformedTokenError::Claim("empty username".to_owned()));
    }
    Ok(claim)
}
