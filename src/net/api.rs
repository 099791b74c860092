//! Job-board API boundary and its browser HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Network`], since these endpoints are only meaningful in the
//! browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is generic over [`JobBoardApi`] so its state machine
//! can be driven by scripted fakes. [`HttpApi`] reads the bearer token from
//! the same [`CredentialStore`] the manager writes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::token::Token;
use super::types::{JobId, SignupInput, UserProfile};
use crate::util::credential_store::CredentialStore;

/// The backend operations the session core depends on.
#[allow(async_fn_in_trait)]
pub trait JobBoardApi {
    /// Exchange credentials for a token.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Token, ApiError>;

    /// Fetch a full profile. Requires the stored token as bearer credential.
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, ApiError>;

    /// Create an account and return its first token.
    async fn register(&self, input: &SignupInput) -> Result<Token, ApiError>;

    /// Record an application by `username` to `job_id`.
    async fn apply_to_job(&self, username: &str, job_id: JobId) -> Result<JobId, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base: &str) -> String {
    format!("{base}/auth/token")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base: &str) -> String {
    format!("{base}/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str, username: &str) -> String {
    format!("{base}/users/{username}")
}

#[cfg(any(test, feature = "hydrate"))]
fn apply_endpoint(base: &str, username: &str, job_id: JobId) -> String {
    format!("{base}/users/{username}/jobs/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &Token) -> String {
    format!("Bearer {}", token.as_str())
}

/// HTTP client for the job-board backend.
#[derive(Clone, Debug)]
pub struct HttpApi<S> {
    base_url: String,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    store: S,
}

impl<S: CredentialStore> HttpApi<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        Self { base_url: base_url.into(), store }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "hydrate")]
impl<S: CredentialStore> HttpApi<S> {
    fn with_bearer(&self, req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.store.get() {
            Some(token) => req.header("Authorization", &bearer_header(&token)),
            None => req,
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(req: gloo_net::http::Request) -> Result<T, ApiError> {
        let resp = req.send().await.map_err(ApiError::network)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        resp.json::<T>().await.map_err(ApiError::network)
    }
}

impl<S: CredentialStore> JobBoardApi for HttpApi<S> {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::LoginInput { username: username.to_owned(), password: password.to_owned() };
            let req = gloo_net::http::Request::post(&token_endpoint(&self.base_url))
                .json(&payload)
                .map_err(ApiError::network)?;
            let body: super::types::TokenResponse = Self::send(req).await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::network("not available on server"))
        }
    }

    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .with_bearer(gloo_net::http::Request::get(&user_endpoint(&self.base_url, username)))
                .build()
                .map_err(ApiError::network)?;
            let body: super::types::UserResponse = Self::send(req).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
            Err(ApiError::network("not available on server"))
        }
    }

    async fn register(&self, input: &SignupInput) -> Result<Token, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&register_endpoint(&self.base_url))
                .json(input)
                .map_err(ApiError::network)?;
            let body: super::types::TokenResponse = Self::send(req).await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(ApiError::network("not available on server"))
        }
    }

    async fn apply_to_job(&self, username: &str, job_id: JobId) -> Result<JobId, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .with_bearer(gloo_net::http::Request::post(&apply_endpoint(&self.base_url, username, job_id)))
                .build()
                .map_err(ApiError::network)?;
            let body: super::types::AppliedResponse = Self::send(req).await?;
            Ok(body.applied)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, job_id);
            Err(ApiError::network("not available on server"))
        }
    }
}
