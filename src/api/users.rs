//
//  notion-cli
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User API operations.
//!
//! Users are people and bots in the workspace. Listing returns one page;
//! `page_size` and `start_cursor` are sent as query parameters only when set.

use std::collections::BTreeMap;

use serde_json::Value;

use super::client::{NotionClient, Transport};
use super::common::Result;
use super::request::Operation;

/// Query parameters for `GET /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersQuery {
    pub page_size: Option<u32>,
    pub start_cursor: Option<String>,
}

impl UsersQuery {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    pub(crate) fn to_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        if let Some(size) = self.page_size {
            query.insert("page_size".to_string(), size.to_string());
        }
        if let Some(cursor) = &self.start_cursor {
            query.insert("start_cursor".to_string(), cursor.clone());
        }
        query
    }
}

impl<T: Transport> NotionClient<T> {
    /// Lists one page of workspace users.
    pub async fn list_users(&self, params: UsersQuery) -> Result<Value> {
        self.send(Operation::ListUsers(params)).await
    }

    /// Retrieves a user.
    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        self.send(Operation::GetUser {
            user_id: user_id.to_string(),
        })
        .await
    }
}
