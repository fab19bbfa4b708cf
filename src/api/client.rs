//
//  notion-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Notion API
//!
//! This module provides the [`Transport`] seam and the [`NotionClient`] that
//! composes credential resolution, request building, execution and error
//! translation.
//!
//! ## Pipeline
//!
//! ```text
//! Operation ──build(credentials)──▶ RequestSpec ──Transport::execute──▶ Value
//!                 │                                      │
//!                 └── Unauthorized                       └── Transport / ApiFailure
//! ```
//!
//! ## Features
//!
//! - One network call per operation, no retries
//! - No timeout override beyond the HTTP client's default
//! - Successful bodies are returned exactly as parsed, never reshaped
//! - Custom User-Agent header

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::common::{ApiError, Result};
use super::request::{build, Operation, RequestSpec};
use crate::auth::Credentials;
use crate::config::ConfigStore;

/// Executes one built request.
///
/// Implementations hold no per-call state and may be used concurrently.
/// There is no ordering guarantee between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the parsed response body.
    ///
    /// # Errors
    ///
    /// - `ApiFailure` with status code and raw body for non-2xx responses
    /// - `Transport` for connection-level failures or an undecodable body
    async fn execute(&self, request: &RequestSpec) -> Result<Value>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with a `notion-cli/<version>` user agent.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("notion-cli/{}", crate::VERSION))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &RequestSpec) -> Result<Value> {
        let mut builder = self
            .http
            .request(request.method.to_reqwest(), request.url());

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), path = %request.path, "received response");

        if !status.is_success() {
            let text = body_or_read_error(response.text().await);
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::transport(format!("Invalid response body: {}", e)))
    }
}

/// Body text of an error response. A body that fails to read is replaced by
/// the read error, so the status is still reported with a cause.
fn body_or_read_error<E: std::fmt::Display>(body: std::result::Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("Failed to read response body: {}", e))
}

/// The main client for the Notion API.
///
/// Holds a snapshot of [`Credentials`] and a [`Transport`]. Resource
/// operations live in the per-resource modules ([`pages`](super::pages),
/// [`databases`](super::databases), [`blocks`](super::blocks),
/// [`search`](super::search), [`users`](super::users)) as methods on this type.
///
/// # Example
///
/// ```rust,no_run
/// use notion_cli::api::NotionClient;
/// use notion_cli::auth::Credentials;
///
/// # async fn example() -> notion_cli::api::Result<()> {
/// let credentials = Credentials::new("https://api.notion.com/v1", Some("secret".into()));
/// let client = NotionClient::new(credentials)?;
/// let page = client.get_page("b55c9c91-384d-452b-81db-d1ef79372b75").await?;
/// println!("{}", page["url"]);
/// # Ok(())
/// # }
/// ```
pub struct NotionClient<T = HttpTransport> {
    credentials: Credentials,
    transport: T,
}

impl NotionClient<HttpTransport> {
    /// Creates a client over HTTP with the given credentials.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self::with_transport(credentials, HttpTransport::new()?))
    }

    /// Resolves credentials from `store` and the environment, then creates a client.
    pub fn from_store(store: &dyn ConfigStore) -> Result<Self> {
        Self::new(Credentials::resolve(store))
    }
}

impl<T: Transport> NotionClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Returns the credentials this client sends requests with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Re-resolves credentials from `store` and the environment.
    pub fn reload_credentials(&mut self, store: &dyn ConfigStore) {
        self.credentials = Credentials::resolve(store);
    }

    /// Builds and executes one operation, returning the raw response body.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` before any network activity if no token is configured
    /// - `Transport` or `ApiFailure` from the transport
    pub async fn send(&self, operation: Operation) -> Result<Value> {
        let request = build(&self.credentials, &operation)?;
        tracing::debug!(
            operation = operation.name(),
            method = %request.method,
            path = %request.path,
            "sending request"
        );
        self.transport.execute(&request).await
    }
}
