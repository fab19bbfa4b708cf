//
//  notion-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module resolves the credentials every Notion API call is made with:
//! the API base URL, the integration token, and the fixed protocol version.
//!
//! ## Resolution Order
//!
//! | Value | 1st | 2nd | Fallback |
//! |-------|-----|-----|----------|
//! | Base URL | `baseURL` in the config store | `NOTION_BASE_URL` | `https://api.notion.com/v1` |
//! | Token | `apiToken` in the config store | `NOTION_API_TOKEN` | absent |
//! | Version | - | - | `2022-06-28` (never configurable) |
//!
//! Empty values count as absent and fall through to the next source.
//!
//! Resolution itself never fails. A missing token only becomes an error when
//! a request that needs authorization is built, which keeps commands such as
//! `notion config list` usable without a token.
//!
//! ## Module Structure
//!
//! - [`token`]: Token format validation and masking for display
//!
//! ## Example
//!
//! ```rust
//! use notion_cli::auth::Credentials;
//! use notion_cli::config::{ConfigStore, MemoryConfigStore};
//!
//! let mut store = MemoryConfigStore::new();
//! store.set("apiToken", "secret_abc").unwrap();
//!
//! let creds = Credentials::resolve_with(&store, |_| None);
//! assert_eq!(creds.base_url, "https://api.notion.com/v1");
//! assert_eq!(creds.bearer_token().unwrap(), "secret_abc");
//! ```

mod token;

pub use token::*;

use std::fmt;

use crate::api::common::{ApiError, Result};
use crate::config::{ConfigStore, API_TOKEN_KEY, BASE_URL_KEY};

/// Default Notion API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Wire protocol revision this client speaks, sent as `Notion-Version`.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "NOTION_BASE_URL";

/// Environment variable holding the integration token.
pub const ENV_API_TOKEN: &str = "NOTION_API_TOKEN";

/// Resolved credentials for one process invocation.
///
/// A read-only snapshot: the config store may change between invocations, and
/// callers that want to observe changes within one process re-resolve.
///
/// # Fields
///
/// * `base_url` - API root without a trailing slash
/// * `token` - Integration token, if one is configured
/// * `api_version` - Always [`NOTION_VERSION`]
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API root, e.g. `https://api.notion.com/v1`.
    pub base_url: String,

    /// Integration token. Absence is valid until a request needs it.
    pub token: Option<String>,

    /// Protocol revision sent with every request.
    pub api_version: &'static str,
}

impl Credentials {
    /// Creates credentials from explicit values.
    ///
    /// Used by embedders and tests that do not go through a config store.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            token: token.filter(|t| !t.is_empty()),
            api_version: NOTION_VERSION,
        }
    }

    /// Resolves credentials from `store`, then the process environment.
    pub fn resolve(store: &dyn ConfigStore) -> Self {
        Self::resolve_with(store, |name| std::env::var(name).ok())
    }

    /// Resolves credentials from `store`, then `env`, then defaults.
    ///
    /// `env` looks up an environment variable by name; passing a closure lets
    /// tests substitute the process environment.
    pub fn resolve_with<F>(store: &dyn ConfigStore, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str, var: &str| {
            store
                .get(key)
                .filter(|v| !v.is_empty())
                .or_else(|| env(var).filter(|v| !v.is_empty()))
        };

        let base_url = lookup(BASE_URL_KEY, ENV_BASE_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = lookup(API_TOKEN_KEY, ENV_API_TOKEN);

        tracing::debug!(base_url = %base_url, has_token = token.is_some(), "resolved credentials");

        Self::new(base_url, token)
    }

    /// Returns true if a token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the token, or `Unauthorized` if none is configured.
    pub fn bearer_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(ApiError::unauthorized)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_deref().map(mask_token))
            .field("api_version", &self.api_version)
            .finish()
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_without_any_source() {
        let store = MemoryConfigStore::new();
        let creds = Credentials::resolve_with(&store, |_| None);
        assert_eq!(creds.base_url, DEFAULT_BASE_URL);
        assert!(creds.token.is_none());
        assert_eq!(creds.api_version, "2022-06-28");
    }

    #[test]
    fn test_env_used_when_store_empty() {
        let store = MemoryConfigStore::new();
        let creds = Credentials::resolve_with(
            &store,
            env_of(&[
                ("NOTION_BASE_URL", "http://localhost:9000/v1"),
                ("NOTION_API_TOKEN", "env-token"),
            ]),
        );
        assert_eq!(creds.base_url, "http://localhost:9000/v1");
        assert_eq!(creds.token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_store_wins_over_env() {
        let mut store = MemoryConfigStore::new();
        store.set(BASE_URL_KEY, "http://store/v1").unwrap();
        store.set(API_TOKEN_KEY, "store-token").unwrap();

        let creds = Credentials::resolve_with(
            &store,
            env_of(&[
                ("NOTION_BASE_URL", "http://env/v1"),
                ("NOTION_API_TOKEN", "env-token"),
            ]),
        );
        assert_eq!(creds.base_url, "http://store/v1");
        assert_eq!(creds.token.as_deref(), Some("store-token"));
    }

    #[test]
    fn test_empty_values_fall_through() {
        let mut store = MemoryConfigStore::new();
        store.set(API_TOKEN_KEY, "").unwrap();

        let creds =
            Credentials::resolve_with(&store, env_of(&[("NOTION_API_TOKEN", "env-token")]));
        assert_eq!(creds.token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_missing_token_is_unauthorized() {
        let creds = Credentials::new(DEFAULT_BASE_URL, None);
        let err = creds.bearer_token().unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let creds = Credentials::new("https://api.notion.com/v1/", None);
        assert_eq!(creds.base_url, "https://api.notion.com/v1");
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new(DEFAULT_BASE_URL, Some("secret_abcdefgh".to_string()));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret_abcdefgh"));
    }
}
