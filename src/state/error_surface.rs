//! Last-operation failure state for auth forms.
//!
//! Holds at most one [`SessionError`]. Forms clear it when they mount so a
//! failure from an earlier, unrelated attempt is never shown; the session
//! manager sets it when login or signup fails and clears it on success.
//! Nothing here is persisted.

#[cfg(test)]
#[path = "error_surface_test.rs"]
mod error_surface_test;

use crate::net::error::ApiError;
use crate::net::token::MalformedTokenError;

/// Why a session operation failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionFailure {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    MalformedToken(#[from] MalformedTokenError),
    #[error("token was issued for {found}, expected {expected}")]
    IdentityMismatch { expected: String, found: String },
    #[error("not logged in")]
    NotLoggedIn,
    #[error("superseded by a newer session operation")]
    Superseded,
}

/// A user-facing failure: display message plus the underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SessionError {
    pub message: String,
    #[source]
    pub cause: SessionFailure,
}

impl From<SessionFailure> for SessionError {
    fn from(cause: SessionFailure) -> Self {
        Self { message: cause.to_string(), cause }
    }
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        SessionFailure::from(err).into()
    }
}

impl SessionError {
    /// Whether the failure came from a result that arrived too late to apply.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        matches!(self.cause, SessionFailure::Superseded)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSurface {
    current: Option<SessionError>,
}

impl ErrorSurface {
    pub fn set(&mut self, error: SessionError) {
        self.current = Some(error);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn get(&self) -> Option<&SessionError> {
        self.current.as_ref()
    }
}
