//
//  notion-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Notion API Responses
//!
//! Notion list endpoints (database query, block children, search, users) all
//! answer with the same cursor-based envelope:
//!
//! ```json
//! {
//!   "object": "list",
//!   "results": [ ... ],
//!   "has_more": true,
//!   "next_cursor": "fe2cc560-036c-44cd-90e8-294d5a74cebc"
//! }
//! ```
//!
//! The client core never follows cursors on its own: every call fetches exactly
//! one page. Callers who want more pass `next_cursor` back as `start_cursor`.
//!
//! [`ListResponse`] is a read-only view used to summarise a page; the raw
//! `serde_json::Value` returned by the operation stays untouched.
//!
//! # Example
//!
//! ```rust
//! use notion_cli::api::common::ListResponse;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "object": "list",
//!     "results": [{"object": "page", "id": "a"}],
//!     "has_more": true,
//!     "next_cursor": "abc"
//! });
//!
//! let page = ListResponse::from_value(&raw);
//! assert_eq!(page.results.len(), 1);
//! assert!(page.has_next());
//! assert_eq!(page.next_cursor(), Some("abc"));
//! ```

use serde_json::Value;

/// A single page of results from a Notion list endpoint.
///
/// # Fields
///
/// * `results` - Items on this page, kept as raw JSON
/// * `has_more` - Whether another page exists
/// * `next_cursor` - Cursor for the next page, when `has_more` is true
#[derive(Debug, Clone, Default)]
pub struct ListResponse {
    /// Items on this page.
    pub results: Vec<Value>,

    /// Whether more results are available past this page.
    pub has_more: bool,

    /// Opaque cursor to pass as `start_cursor` for the next page.
    pub next_cursor: Option<String>,
}

impl ListResponse {
    /// Builds a view over a raw list response.
    ///
    /// Fields that are missing or of the wrong shape fall back to their
    /// defaults, so a non-list value yields an empty page.
    pub fn from_value(value: &Value) -> Self {
        Self {
            results: value
                .get("results")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
            has_more: value
                .get("has_more")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            next_cursor: value
                .get("next_cursor")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Returns true if there is another page to fetch.
    pub fn has_next(&self) -> bool {
        self.has_more && self.next_cursor.is_some()
    }

    /// Returns the cursor for the next page, if any.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}
