//
//  notion-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Notion client core
//!
//! This module provides the single error type every core operation returns,
//! along with the pagination envelope shared by list-style endpoints.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error value for all API operations
//! - [`ErrorKind`] - The three failure classes a caller can observe
//! - [`ListResponse`] - Typed view over a single page of list results
//!
//! # Error Text
//!
//! All user-facing error text is produced here. Resource operations never
//! format their own messages; they only propagate an [`ApiError`].
//!
//! | Kind | Message |
//! |------|---------|
//! | `Unauthorized` | `API token not configured. Run: notion config set apiToken YOUR_TOKEN` |
//! | `Transport` | The underlying network error message, unchanged |
//! | `ApiFailure` | `Notion API Error: <status> - <json of raw body>` |
//!
//! # Example
//!
//! ```rust
//! use notion_cli::api::common::{ApiError, ErrorKind};
//! use serde_json::json;
//!
//! let err = ApiError::api_failure(404, json!({"message": "not found"}));
//! assert_eq!(err.kind, ErrorKind::ApiFailure);
//! assert_eq!(err.status_code, Some(404));
//! assert_eq!(err.to_string(), r#"Notion API Error: 404 - {"message":"not found"}"#);
//! ```

use serde_json::Value;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Result alias used throughout the client core.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message shown when an operation needs a token and none is configured.
pub const UNAUTHORIZED_MESSAGE: &str =
    "API token not configured. Run: notion config set apiToken YOUR_TOKEN";

/// The class of failure carried by an [`ApiError`].
///
/// # Variants
///
/// | Variant | Cause | Status code |
/// |---------|-------|-------------|
/// | `Transport` | DNS failure, refused or reset connection, undecodable body | Never |
/// | `Unauthorized` | No API token configured | Never |
/// | `ApiFailure` | The remote service answered with a non-2xx status | Always |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A network-level failure. Not retried; surfaced as-is.
    Transport,

    /// No API token is configured. Recoverable by running
    /// `notion config set apiToken ...`.
    Unauthorized,

    /// The remote service returned a non-success status.
    ApiFailure,
}

/// Unified error value for every Notion API operation.
///
/// `ApiError` carries enough information for the presentation layer to render
/// a message and pick an exit status without re-deriving anything. Its
/// `Display` implementation is exactly [`ApiError::message`].
///
/// # Fields
///
/// * `kind` - Failure class, see [`ErrorKind`]
/// * `status_code` - HTTP status for `ApiFailure`, `None` otherwise
/// * `message` - Human-readable text
/// * `raw` - Response body for `ApiFailure`; non-JSON bodies are kept as a JSON string
///
/// # Example
///
/// ```rust
/// use notion_cli::api::common::{ApiError, ErrorKind};
///
/// let err = ApiError::unauthorized();
/// assert_eq!(err.kind, ErrorKind::Unauthorized);
/// assert!(err.status_code.is_none());
/// ```
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ApiError {
    /// The failure class.
    pub kind: ErrorKind,

    /// HTTP status code when the remote service answered.
    pub status_code: Option<u16>,

    /// Human-readable error text.
    pub message: String,

    /// Raw response body returned alongside a non-2xx status.
    pub raw: Option<Value>,
}

impl ApiError {
    /// Creates the error returned when no API token is configured.
    pub fn unauthorized() -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            status_code: None,
            message: UNAUTHORIZED_MESSAGE.to_string(),
            raw: None,
        }
    }

    /// Creates a transport error, keeping the underlying message unchanged.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            status_code: None,
            message: message.into(),
            raw: None,
        }
    }

    /// Creates an error for a non-2xx response.
    ///
    /// The message embeds the status and the compact JSON form of `raw`.
    pub fn api_failure(status: u16, raw: Value) -> Self {
        let body = serde_json::to_string(&raw).unwrap_or_default();
        Self {
            kind: ErrorKind::ApiFailure,
            status_code: Some(status),
            message: format!("Notion API Error: {} - {}", status, body),
            raw: Some(raw),
        }
    }

    /// Translates a non-2xx response body into an `ApiFailure`.
    ///
    /// JSON bodies are kept as parsed; anything else (including an empty body)
    /// is kept verbatim as a JSON string.
    pub fn from_response(status: u16, body: &str) -> Self {
        let raw = serde_json::from_str::<Value>(body)
            .unwrap_or_else(|_| Value::String(body.to_string()));
        Self::api_failure(status, raw)
    }

    /// Returns true if the remote service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::ApiFailure && self.status_code == Some(404)
    }

    /// Returns true if this error was caused by a missing API token.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    /// Maps this error onto the CLI exit codes in [`crate::exit_codes`].
    ///
    /// | Error | Exit code |
    /// |-------|-----------|
    /// | `Unauthorized` | `AUTH_ERROR` |
    /// | `ApiFailure` 404 | `NOT_FOUND` |
    /// | `ApiFailure` 429 | `RATE_LIMIT` |
    /// | anything else | `ERROR` |
    pub fn exit_code(&self) -> i32 {
        use crate::exit_codes;

        match (self.kind, self.status_code) {
            (ErrorKind::Unauthorized, _) => exit_codes::AUTH_ERROR,
            (ErrorKind::ApiFailure, Some(404)) => exit_codes::NOT_FOUND,
            (ErrorKind::ApiFailure, Some(429)) => exit_codes::RATE_LIMIT,
            _ => exit_codes::ERROR,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::transport(format!("Invalid response body: {}", err));
        }
        Self::transport(err.to_string())
    }
}
