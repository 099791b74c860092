//! Build-time client configuration.
//!
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and fall back to local
//! development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Job-board API root, without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the raw bearer token.
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `JOBLY_API_BASE_URL`: default `http://localhost:3001`
    /// - `JOBLY_TOKEN_STORAGE_KEY`: default `token`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("JOBLY_API_BASE_URL"), option_env!("JOBLY_TOKEN_STORAGE_KEY"))
    }

    fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = non_blank(token_storage_key)
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
            .to_owned();
        Self { api_base_url, token_storage_key }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
