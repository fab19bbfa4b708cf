//
//  notion-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client core for the Notion REST API
//! (`https://api.notion.com/v1`, protocol version `2022-06-28`).
//!
//! ## Architecture
//!
//! - [`request`]: The closed [`Operation`] catalog and the request builder
//! - [`client`]: The [`Transport`] seam and the [`NotionClient`]
//! - [`common`]: [`ApiError`] and the list-response envelope
//! - [`pages`], [`databases`], [`blocks`], [`search`], [`users`]: wire payloads
//!   and resource operations per family
//!
//! ## Usage
//!
//! ```rust,no_run
//! use notion_cli::api::NotionClient;
//! use notion_cli::api::databases::DatabaseQuery;
//! use notion_cli::config::FileConfigStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = FileConfigStore::load()?;
//! let client = NotionClient::from_store(&store)?;
//!
//! let rows = client
//!     .query_database("d9824bdc-8445-4327-be8b-5b47500af6ce", DatabaseQuery::new(50))
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&rows)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<serde_json::Value, ApiError>`:
//!
//! - `Unauthorized`: no token configured, raised before any network call
//! - `Transport`: DNS, refused or reset connections
//! - `ApiFailure`: any non-2xx response, with status code and raw body

/// HTTP transport and the Notion client.
pub mod client;

/// Error type and pagination envelope shared by all operations.
pub mod common;

/// Operation catalog and request builder.
pub mod request;

/// Page payloads and operations.
pub mod pages;

/// Database payloads and operations.
pub mod databases;

/// Block payloads and operations.
pub mod blocks;

/// Search payloads and operations.
pub mod search;

/// User operations.
pub mod users;

pub use client::{HttpTransport, NotionClient, Transport};
pub use common::{ApiError, ErrorKind, ListResponse, Result};
pub use request::{Method, Operation, RequestSpec};
