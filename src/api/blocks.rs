//
//  notion-cli
//  api/blocks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Block API payloads and operations.
//!
//! Page content is a tree of blocks. A page id is also a block id, so
//! appending children to a page adds content at its end.
//!
//! # Wire Shapes
//!
//! ```json
//! // GET /blocks/{id}/children?page_size=100
//!
//! // PATCH /blocks/{id}/children
//! { "children": [ { "object": "block", "type": "paragraph",
//!                   "paragraph": { "rich_text": [ { "text": { "content": "..." } } ] } } ] }
//! ```

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::client::{NotionClient, Transport};
use super::common::Result;
use super::databases::DEFAULT_PAGE_SIZE;
use super::request::Operation;

/// Query parameters for `GET /blocks/{id}/children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildrenQuery {
    pub page_size: u32,
    pub start_cursor: Option<String>,
}

impl ChildrenQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            start_cursor: None,
        }
    }

    /// Continues from a previous page's `next_cursor`.
    pub fn with_start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    pub(crate) fn to_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        query.insert("page_size".to_string(), self.page_size.to_string());
        if let Some(cursor) = &self.start_cursor {
            query.insert("start_cursor".to_string(), cursor.clone());
        }
        query
    }
}

impl Default for ChildrenQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Builds a paragraph block holding plain `text`.
pub fn paragraph(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": {
            "rich_text": [{ "text": { "content": text } }]
        }
    })
}

impl<T: Transport> NotionClient<T> {
    /// Retrieves a block.
    pub async fn get_block(&self, block_id: &str) -> Result<Value> {
        self.send(Operation::GetBlock {
            block_id: block_id.to_string(),
        })
        .await
    }

    /// Lists one page of a block's children.
    pub async fn get_block_children(&self, block_id: &str, params: ChildrenQuery) -> Result<Value> {
        self.send(Operation::GetBlockChildren {
            block_id: block_id.to_string(),
            params,
        })
        .await
    }

    /// Appends blocks to the end of a block's children.
    pub async fn append_block_children(&self, block_id: &str, children: Vec<Value>) -> Result<Value> {
        self.send(Operation::AppendBlockChildren {
            block_id: block_id.to_string(),
            children,
        })
        .await
    }

    /// Deletes (archives) a block.
    pub async fn delete_block(&self, block_id: &str) -> Result<Value> {
        self.send(Operation::DeleteBlock {
            block_id: block_id.to_string(),
        })
        .await
    }
}
