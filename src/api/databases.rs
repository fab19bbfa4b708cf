//
//  notion-cli
//  api/databases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Database API payloads and operations.
//!
//! Databases are collections of pages sharing a property schema. Querying a
//! database returns one page of entries, bounded by `page_size`.
//!
//! # Wire Shapes
//!
//! ```json
//! // POST /databases/{id}/query
//! { "page_size": 100, "filter": { ... } }
//!
//! // POST /databases
//! { "parent": { "page_id": "..." },
//!   "title": [ { "text": { "content": "..." } } ],
//!   "properties": { "Name": { "title": {} } } }
//! ```

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::client::{NotionClient, Transport};
use super::common::Result;
use super::pages::Parent;
use super::request::Operation;

/// Default number of entries per page for list-style requests.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Body of `POST /databases/{id}/query`.
///
/// `filter` and `start_cursor` are omitted entirely when unset, never sent as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseQuery {
    pub page_size: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl DatabaseQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            filter: None,
            start_cursor: None,
        }
    }

    /// Sets a Notion filter object.
    pub fn with_filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Continues from a previous page's `next_cursor`.
    pub fn with_start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }
}

impl Default for DatabaseQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Body of `POST /databases`.
///
/// New databases get a single title column named `Name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabase {
    pub parent: Parent,
    pub title: Vec<Value>,
    pub properties: Map<String, Value>,
}

impl CreateDatabase {
    /// Creates a database payload under page `parent_id` titled `title`.
    pub fn new(parent_id: impl Into<String>, title: &str) -> Self {
        let mut properties = Map::new();
        properties.insert("Name".to_string(), json!({ "title": {} }));

        Self {
            parent: Parent::page(parent_id),
            title: vec![json!({ "text": { "content": title } })],
            properties,
        }
    }
}

impl<T: Transport> NotionClient<T> {
    /// Retrieves a database.
    pub async fn get_database(&self, database_id: &str) -> Result<Value> {
        self.send(Operation::GetDatabase {
            database_id: database_id.to_string(),
        })
        .await
    }

    /// Queries one page of database entries.
    pub async fn query_database(&self, database_id: &str, query: DatabaseQuery) -> Result<Value> {
        self.send(Operation::QueryDatabase {
            database_id: database_id.to_string(),
            query,
        })
        .await
    }

    /// Creates a database.
    pub async fn create_database(&self, database: CreateDatabase) -> Result<Value> {
        self.send(Operation::CreateDatabase(database)).await
    }

    /// Updates a database with a caller-supplied body (title, description, properties).
    pub async fn update_database(&self, database_id: &str, update: Value) -> Result<Value> {
        self.send(Operation::UpdateDatabase {
            database_id: database_id.to_string(),
            update,
        })
        .await
    }
}
