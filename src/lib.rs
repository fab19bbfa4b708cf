//
//  notion-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Notion CLI Library
//!
//! A client core and command-line interface for the Notion API: pages,
//! databases, blocks, search and users over authenticated HTTPS.
//!
//! ## Overview
//!
//! The core resolves credentials from layered configuration, builds requests
//! against the versioned Notion API, executes them, and normalizes every
//! failure into a single [`ApiError`](api::ApiError). Successful responses
//! are returned as the exact JSON Notion sent.
//!
//! ## Module Structure
//!
//! - [`api`]: Operation catalog, request builder, transport, error type
//! - [`auth`]: Credential resolution (config store, environment, defaults)
//! - [`config`]: Persistent key-value configuration store
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Rendering of results, tables, spinners and errors
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use notion_cli::api::NotionClient;
//! use notion_cli::api::search::{ObjectType, SearchRequest};
//! use notion_cli::config::FileConfigStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = FileConfigStore::load()?;
//! let client = NotionClient::from_store(&store)?;
//! let results = client
//!     .search(SearchRequest::new("meeting notes", Some(ObjectType::Page)))
//!     .await?;
//! println!("{}", results["results"].as_array().map_or(0, Vec::len));
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains the CLI commands and arguments defined with the clap derive API.
/// Each command module parses its arguments, calls one client operation and
/// renders the result.
pub mod cli;

/// Client core for the Notion API.
///
/// Handles request building, authentication headers, execution and error
/// translation for pages, databases, blocks, search and users.
pub mod api;

/// Credential resolution.
///
/// Resolves the base URL and integration token from the config store, then
/// the environment, then built-in defaults.
pub mod auth;

/// Configuration store management.
///
/// Manages the CLI's settings stored in platform-specific locations:
/// - Linux: `~/.config/notion-cli/config.toml`
/// - macOS: `~/Library/Application Support/notion-cli/config.toml`
/// - Windows: `%APPDATA%\notion-cli\config\config.toml`
pub mod config;

/// Output formatting.
///
/// Raw JSON pass-through for `--json`, human summaries, tables and spinners.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the Notion client.
pub use api::NotionClient;

/// Application name constant.
///
/// The name of the CLI binary.
pub const APP_NAME: &str = "notion";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution, including network
    /// failures and unclassified API errors. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required.
    ///
    /// No API token is configured.
    /// Run `notion config set apiToken YOUR_TOKEN` to configure one.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested page, database, block or user does not exist or is not
    /// shared with the integration.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    ///
    /// Notion answered 429. Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
