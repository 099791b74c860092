//! Job-board API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers failures with `{"error": {"message", "status"}}`,
//! where `message` is a string or, for schema violations, a list of
//! strings. Every non-OK response is folded into one [`ApiError`] variant
//! so callers can branch on the kind of failure instead of status codes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid username/password")]
    InvalidCredentials,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: ErrorMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    fn into_lines(self) -> Vec<String> {
        match self {
            Self::One(line) => vec![line],
            Self::Many(lines) => lines,
        }
    }
}

impl ApiError {
    /// Classify a non-OK HTTP response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let lines = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|env| env.error.message.into_lines())
            .unwrap_or_default();
        let summary = lines.first().cloned().unwrap_or_else(|| format!("request failed: {status}"));

        match status {
            401 => Self::InvalidCredentials,
            404 => Self::NotFound(summary),
            409 => Self::Conflict(summary),
            400 if summary.starts_with("Duplicate") => Self::Conflict(summary),
            400 if lines.is_empty() => Self::Validation(vec![summary]),
            400 => Self::Validation(lines),
            _ => Self::Network(format!("{status}: {summary}")),
        }
    }

    /// Wrap a transport-level failure (request never produced a response).
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}
