//
//  notion-cli
//  api/pages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Page API payloads and operations.
//!
//! A Notion page lives under a parent page or a database. Its content is a
//! tree of blocks (see [`blocks`](super::blocks)); its metadata is a set of
//! properties, the only required one being the title.
//!
//! # Wire Shapes
//!
//! ```json
//! // POST /pages
//! { "parent": { "page_id": "..." },
//!   "properties": { "title": { "title": [ { "text": { "content": "..." } } ] } } }
//!
//! // PATCH /pages/{id} (archive)
//! { "archived": true }
//! ```

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::client::{NotionClient, Transport};
use super::common::Result;
use super::request::Operation;

/// Where a new page is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Parent {
    /// Serialized as `{"page_id": "..."}`.
    #[serde(rename = "page_id")]
    Page(String),

    /// Serialized as `{"database_id": "..."}`.
    #[serde(rename = "database_id")]
    Database(String),
}

impl Parent {
    /// A parent page.
    pub fn page(id: impl Into<String>) -> Self {
        Self::Page(id.into())
    }

    /// A parent database.
    pub fn database(id: impl Into<String>) -> Self {
        Self::Database(id.into())
    }
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePage {
    pub parent: Parent,
    pub properties: Map<String, Value>,
}

impl CreatePage {
    /// Creates a page payload under `parent` with the given properties.
    pub fn new(parent: Parent, properties: Map<String, Value>) -> Self {
        Self { parent, properties }
    }
}

/// Body of `PATCH /pages/{id}`.
///
/// Absent fields are omitted from the body, so an empty update sends `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl UpdatePage {
    /// An update that only archives the page.
    pub fn archive() -> Self {
        Self {
            properties: None,
            archived: Some(true),
        }
    }

    /// An update that replaces properties.
    pub fn properties(properties: Map<String, Value>) -> Self {
        Self {
            properties: Some(properties),
            archived: None,
        }
    }
}

/// Builds the `properties` object setting a page title.
///
/// # Example
///
/// ```rust
/// use notion_cli::api::pages::title_property;
/// use serde_json::json;
///
/// let props = title_property("Ideas");
/// assert_eq!(
///     serde_json::Value::Object(props),
///     json!({"title": {"title": [{"text": {"content": "Ideas"}}]}})
/// );
/// ```
pub fn title_property(title: &str) -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "title".to_string(),
        json!({ "title": [{ "text": { "content": title } }] }),
    );
    properties
}

impl<T: Transport> NotionClient<T> {
    /// Retrieves a page.
    pub async fn get_page(&self, page_id: &str) -> Result<Value> {
        self.send(Operation::GetPage {
            page_id: page_id.to_string(),
        })
        .await
    }

    /// Creates a page.
    pub async fn create_page(&self, page: CreatePage) -> Result<Value> {
        self.send(Operation::CreatePage(page)).await
    }

    /// Updates page properties or archive state.
    pub async fn update_page(&self, page_id: &str, update: UpdatePage) -> Result<Value> {
        self.send(Operation::UpdatePage {
            page_id: page_id.to_string(),
            update,
        })
        .await
    }

    /// Archives a page. Same request as `update_page(id, UpdatePage::archive())`.
    pub async fn archive_page(&self, page_id: &str) -> Result<Value> {
        self.send(Operation::ArchivePage {
            page_id: page_id.to_string(),
        })
        .await
    }
}
