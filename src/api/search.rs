//
//  notion-cli
//  api/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search API payloads and operations.
//!
//! Search covers every page and database shared with the integration,
//! most recently edited first.
//!
//! # Wire Shape
//!
//! ```json
//! // POST /search
//! { "query": "notes",
//!   "filter": { "property": "object", "value": "page" },
//!   "sort": { "direction": "descending", "timestamp": "last_edited_time" } }
//! ```
//!
//! Without a type filter, `filter` is sent as an empty object.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::client::{NotionClient, Transport};
use super::common::Result;
use super::request::Operation;

/// Object types search results can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Page,
    Database,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Page => f.write_str("page"),
            ObjectType::Database => f.write_str("database"),
        }
    }
}

/// `filter` member of a search body. Serializes to `{}` when no type is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<ObjectType>,
}

impl SearchFilter {
    /// Restricts results to one object type.
    pub fn object(kind: ObjectType) -> Self {
        Self {
            property: Some("object"),
            value: Some(kind),
        }
    }
}

/// `sort` member of a search body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSort {
    direction: &'static str,
    timestamp: &'static str,
}

impl Default for SearchSort {
    /// Most recently edited first.
    fn default() -> Self {
        Self {
            direction: "descending",
            timestamp: "last_edited_time",
        }
    }
}

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub filter: SearchFilter,
    pub sort: SearchSort,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl SearchRequest {
    /// Searches for `query`, optionally narrowed to one object type.
    pub fn new(query: impl Into<String>, kind: Option<ObjectType>) -> Self {
        Self {
            query: query.into(),
            filter: kind.map(SearchFilter::object).unwrap_or_default(),
            sort: SearchSort::default(),
            start_cursor: None,
        }
    }

    /// Continues from a previous page's `next_cursor`.
    pub fn with_start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }
}

impl<T: Transport> NotionClient<T> {
    /// Searches pages and databases shared with the integration.
    pub async fn search(&self, request: SearchRequest) -> Result<Value> {
        self.send(Operation::Search(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_database_filter() {
        let body = serde_json::to_value(SearchRequest::new("q", Some(ObjectType::Database))).unwrap();
        assert_eq!(body["filter"], json!({"property": "object", "value": "database"}));
    }

    #[test]
    fn test_cursor_included_when_set() {
        let body = serde_json::to_value(SearchRequest::new("q", None).with_start_cursor("c")).unwrap();
        assert_eq!(body["start_cursor"], json!("c"));
    }
}
