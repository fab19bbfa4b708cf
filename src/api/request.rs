//
//  notion-cli
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! Turns one logical [`Operation`] plus resolved [`Credentials`] into an
//! immutable [`RequestSpec`]: method, URL parts, headers, query and body.
//!
//! ## Headers
//!
//! Every request carries:
//!
//! | Header | Value |
//! |--------|-------|
//! | `Authorization` | `Bearer <token>` |
//! | `Notion-Version` | `2022-06-28` |
//! | `Content-Type` | `application/json` |
//!
//! ## Example
//!
//! ```rust
//! use notion_cli::api::request::{build, Method, Operation};
//! use notion_cli::auth::Credentials;
//!
//! let creds = Credentials::new("https://api.notion.com/v1", Some("secret".to_string()));
//! let spec = build(&creds, &Operation::GetPage { page_id: "abc".to_string() })?;
//!
//! assert_eq!(spec.method, Method::Get);
//! assert_eq!(spec.url(), "https://api.notion.com/v1/pages/abc");
//! assert_eq!(spec.header("Authorization"), Some("Bearer secret"));
//! # Ok::<(), notion_cli::api::ApiError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::blocks::ChildrenQuery;
use super::common::{ApiError, Result};
use super::databases::{CreateDatabase, DatabaseQuery};
use super::pages::{CreatePage, UpdatePage};
use super::search::SearchRequest;
use super::users::UsersQuery;
use crate::auth::Credentials;

/// HTTP methods used by the Notion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Converts to `reqwest::Method`.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete catalog of Notion operations this client can issue.
///
/// Each variant maps to exactly one HTTP call. Adding an operation means
/// adding a variant here, and the compiler then points at every `match` that
/// has to learn about it.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `GET /pages/{id}`
    GetPage { page_id: String },

    /// `POST /pages`
    CreatePage(CreatePage),

    /// `PATCH /pages/{id}`
    UpdatePage { page_id: String, update: UpdatePage },

    /// `PATCH /pages/{id}` with `{"archived": true}`
    ArchivePage { page_id: String },

    /// `GET /databases/{id}`
    GetDatabase { database_id: String },

    /// `POST /databases/{id}/query`
    QueryDatabase {
        database_id: String,
        query: DatabaseQuery,
    },

    /// `POST /databases`
    CreateDatabase(CreateDatabase),

    /// `PATCH /databases/{id}` with a caller-supplied body
    UpdateDatabase { database_id: String, update: Value },

    /// `GET /blocks/{id}`
    GetBlock { block_id: String },

    /// `GET /blocks/{id}/children`
    GetBlockChildren {
        block_id: String,
        params: ChildrenQuery,
    },

    /// `PATCH /blocks/{id}/children`
    AppendBlockChildren {
        block_id: String,
        children: Vec<Value>,
    },

    /// `DELETE /blocks/{id}`
    DeleteBlock { block_id: String },

    /// `POST /search`
    Search(SearchRequest),

    /// `GET /users`
    ListUsers(UsersQuery),

    /// `GET /users/{id}`
    GetUser { user_id: String },
}

impl Operation {
    /// Returns the operation's name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetPage { .. } => "getPage",
            Operation::CreatePage(_) => "createPage",
            Operation::UpdatePage { .. } => "updatePage",
            Operation::ArchivePage { .. } => "archivePage",
            Operation::GetDatabase { .. } => "getDatabase",
            Operation::QueryDatabase { .. } => "queryDatabase",
            Operation::CreateDatabase(_) => "createDatabase",
            Operation::UpdateDatabase { .. } => "updateDatabase",
            Operation::GetBlock { .. } => "getBlock",
            Operation::GetBlockChildren { .. } => "getBlockChildren",
            Operation::AppendBlockChildren { .. } => "appendBlockChildren",
            Operation::DeleteBlock { .. } => "deleteBlock",
            Operation::Search(_) => "search",
            Operation::ListUsers(_) => "listUsers",
            Operation::GetUser { .. } => "getUser",
        }
    }

    /// Returns true if the operation needs an API token.
    ///
    /// Every Notion endpoint is authenticated.
    pub fn requires_auth(&self) -> bool {
        true
    }

    /// Returns the HTTP method for this operation.
    pub fn method(&self) -> Method {
        match self {
            Operation::GetPage { .. }
            | Operation::GetDatabase { .. }
            | Operation::GetBlock { .. }
            | Operation::GetBlockChildren { .. }
            | Operation::ListUsers(_)
            | Operation::GetUser { .. } => Method::Get,
            Operation::CreatePage(_)
            | Operation::QueryDatabase { .. }
            | Operation::CreateDatabase(_)
            | Operation::Search(_) => Method::Post,
            Operation::UpdatePage { .. }
            | Operation::ArchivePage { .. }
            | Operation::UpdateDatabase { .. }
            | Operation::AppendBlockChildren { .. } => Method::Patch,
            Operation::DeleteBlock { .. } => Method::Delete,
        }
    }

    /// Returns the id of the page, database, block or user this operation
    /// addresses, if it addresses one.
    pub fn resource_id(&self) -> Option<&str> {
        match self {
            Operation::GetPage { page_id }
            | Operation::UpdatePage { page_id, .. }
            | Operation::ArchivePage { page_id } => Some(page_id.as_str()),
            Operation::GetDatabase { database_id }
            | Operation::QueryDatabase { database_id, .. }
            | Operation::UpdateDatabase { database_id, .. } => Some(database_id.as_str()),
            Operation::GetBlock { block_id }
            | Operation::GetBlockChildren { block_id, .. }
            | Operation::AppendBlockChildren { block_id, .. }
            | Operation::DeleteBlock { block_id } => Some(block_id.as_str()),
            Operation::GetUser { user_id } => Some(user_id.as_str()),
            Operation::CreatePage(_)
            | Operation::CreateDatabase(_)
            | Operation::Search(_)
            | Operation::ListUsers(_) => None,
        }
    }

    /// Returns the API path, relative to the base URL.
    ///
    /// The resource id is percent-encoded as a single segment, so `/`, `?`
    /// and `#` inside an id never change which endpoint is addressed.
    pub fn path(&self) -> String {
        let id = self.resource_id().map(urlencoding::encode).unwrap_or_default();
        match self {
            Operation::GetPage { .. }
            | Operation::UpdatePage { .. }
            | Operation::ArchivePage { .. } => format!("/pages/{}", id),
            Operation::CreatePage(_) => "/pages".to_string(),
            Operation::GetDatabase { .. } | Operation::UpdateDatabase { .. } => {
                format!("/databases/{}", id)
            }
            Operation::QueryDatabase { .. } => format!("/databases/{}/query", id),
            Operation::CreateDatabase(_) => "/databases".to_string(),
            Operation::GetBlock { .. } | Operation::DeleteBlock { .. } => {
                format!("/blocks/{}", id)
            }
            Operation::GetBlockChildren { .. } | Operation::AppendBlockChildren { .. } => {
                format!("/blocks/{}/children", id)
            }
            Operation::Search(_) => "/search".to_string(),
            Operation::ListUsers(_) => "/users".to_string(),
            Operation::GetUser { .. } => format!("/users/{}", id),
        }
    }

    /// Returns the query parameters, if the operation sends any.
    pub fn query(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Operation::GetBlockChildren { params, .. } => Some(params.to_query()),
            Operation::ListUsers(params) => Some(params.to_query()).filter(|q| !q.is_empty()),
            _ => None,
        }
    }

    /// Returns the JSON body, if the operation sends one.
    pub fn body(&self) -> Result<Option<Value>> {
        let body = match self {
            Operation::CreatePage(page) => to_json(page)?,
            Operation::UpdatePage { update, .. } => to_json(update)?,
            Operation::ArchivePage { .. } => to_json(&UpdatePage::archive())?,
            Operation::QueryDatabase { query, .. } => to_json(query)?,
            Operation::CreateDatabase(database) => to_json(database)?,
            Operation::UpdateDatabase { update, .. } => update.clone(),
            Operation::AppendBlockChildren { children, .. } => {
                serde_json::json!({ "children": children })
            }
            Operation::Search(search) => to_json(search)?,
            _ => return Ok(None),
        };
        Ok(Some(body))
    }
}

/// A fully-built description of one outgoing HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,

    /// API root the path is appended to.
    pub base_url: String,

    /// Path relative to `base_url`, starting with `/`.
    pub path: String,

    /// Request headers, keyed by canonical header name.
    pub headers: BTreeMap<&'static str, String>,

    /// Query parameters, if any.
    pub query: Option<BTreeMap<String, String>>,

    /// JSON body, if any.
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Returns the full request URL without the query string.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// Returns the value of header `name`, if set.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Builds the request for `operation` using `credentials`.
///
/// # Errors
///
/// Returns `Unauthorized` if the operation needs a token and none is
/// configured, and `Transport` for an empty or dot-only resource id.
/// Nothing is sent over the network in either case.
pub fn build(credentials: &Credentials, operation: &Operation) -> Result<RequestSpec> {
    let mut headers = BTreeMap::new();

    if operation.requires_auth() {
        let token = credentials.bearer_token()?;
        headers.insert("Authorization", format!("Bearer {}", token));
    }
    if let Some(id) = operation.resource_id() {
        check_resource_id(id)?;
    }
    headers.insert("Notion-Version", credentials.api_version.to_string());
    headers.insert("Content-Type", "application/json".to_string());

    Ok(RequestSpec {
        method: operation.method(),
        base_url: credentials.base_url.clone(),
        path: operation.path(),
        headers,
        query: operation.query(),
        body: operation.body()?,
    })
}

/// Rejects ids that no percent-encoding keeps inside their own segment.
///
/// URL parsers resolve `.` and `..` segments (encoded or not), and an empty
/// id collapses onto the collection path.
fn check_resource_id(id: &str) -> Result<()> {
    if id.is_empty() || id.chars().all(|c| c == '.') {
        return Err(ApiError::transport(format!("Invalid resource id: {:?}", id)));
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::transport(format!("Failed to encode request body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::blocks::paragraph;
    use crate::api::pages::{title_property, Parent};
    use crate::api::search::ObjectType;
    use serde_json::json;

    fn creds() -> Credentials {
        Credentials::new("https://api.notion.com/v1", Some("secret_t".to_string()))
    }

    #[test]
    fn test_headers() {
        let spec = build(&creds(), &Operation::GetUser { user_id: "u1".to_string() }).unwrap();
        assert_eq!(spec.header("Authorization"), Some("Bearer secret_t"));
        assert_eq!(spec.header("Notion-Version"), Some("2022-06-28"));
        assert_eq!(spec.header("Content-Type"), Some("application/json"));
        assert_eq!(spec.url(), "https://api.notion.com/v1/users/u1");
        assert!(spec.body.is_none());
        assert!(spec.query.is_none());
    }

    /// One of each operation. The match below stops compiling when a variant
    /// is added without being listed here.
    fn every_operation() -> Vec<Operation> {
        let ops = vec![
            Operation::GetPage { page_id: "p".into() },
            Operation::CreatePage(CreatePage::new(Parent::page("p"), title_property("t"))),
            Operation::UpdatePage {
                page_id: "p".into(),
                update: UpdatePage::default(),
            },
            Operation::ArchivePage { page_id: "p".into() },
            Operation::GetDatabase { database_id: "d".into() },
            Operation::QueryDatabase {
                database_id: "d".into(),
                query: DatabaseQuery::new(10),
            },
            Operation::CreateDatabase(CreateDatabase::new("p", "t")),
            Operation::UpdateDatabase {
                database_id: "d".into(),
                update: json!({}),
            },
            Operation::GetBlock { block_id: "b".into() },
            Operation::GetBlockChildren {
                block_id: "b".into(),
                params: ChildrenQuery::default(),
            },
            Operation::AppendBlockChildren {
                block_id: "b".into(),
                children: vec![paragraph("x")],
            },
            Operation::DeleteBlock { block_id: "b".into() },
            Operation::Search(SearchRequest::new("", None)),
            Operation::ListUsers(UsersQuery::default()),
            Operation::GetUser { user_id: "u".into() },
        ];

        for op in &ops {
            match op {
                Operation::GetPage { .. }
                | Operation::CreatePage(_)
                | Operation::UpdatePage { .. }
                | Operation::ArchivePage { .. }
                | Operation::GetDatabase { .. }
                | Operation::QueryDatabase { .. }
                | Operation::CreateDatabase(_)
                | Operation::UpdateDatabase { .. }
                | Operation::GetBlock { .. }
                | Operation::GetBlockChildren { .. }
                | Operation::AppendBlockChildren { .. }
                | Operation::DeleteBlock { .. }
                | Operation::Search(_)
                | Operation::ListUsers(_)
                | Operation::GetUser { .. } => {}
            }
        }
        ops
    }

    #[test]
    fn test_every_operation_is_listed_once() {
        let names: std::collections::BTreeSet<&str> =
            every_operation().iter().map(Operation::name).collect();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_missing_token_fails_for_every_operation() {
        let creds = Credentials::new("https://api.notion.com/v1", None);
        for op in every_operation() {
            let err = build(&creds, &op).unwrap_err();
            assert!(err.is_unauthorized(), "{} should need a token", op.name());
        }
    }

    #[test]
    fn test_ids_are_encoded_as_one_segment() {
        let op = Operation::GetPage { page_id: "../users".into() };
        assert_eq!(op.path(), "/pages/..%2Fusers");

        let op = Operation::ArchivePage { page_id: "abc?x=1#frag".into() };
        assert_eq!(op.path(), "/pages/abc%3Fx%3D1%23frag");

        let op = Operation::GetBlockChildren {
            block_id: "../../search".into(),
            params: ChildrenQuery::default(),
        };
        assert_eq!(op.path(), "/blocks/..%2F..%2Fsearch/children");

        let spec = build(&creds(), &Operation::GetUser { user_id: "a/b".into() }).unwrap();
        assert_eq!(spec.url(), "https://api.notion.com/v1/users/a%2Fb");
    }

    #[test]
    fn test_plain_ids_are_unchanged() {
        let id = "b55c9c91-384d-452b-81db-d1ef79372b75";
        let op = Operation::GetDatabase { database_id: id.into() };
        assert_eq!(op.path(), format!("/databases/{}", id));
    }

    #[test]
    fn test_dot_and_empty_ids_are_rejected() {
        for id in ["", ".", ".."] {
            let op = Operation::DeleteBlock { block_id: id.into() };
            let err = build(&creds(), &op).unwrap_err();
            assert_eq!(err.kind, crate::api::ErrorKind::Transport, "id {:?}", id);
            assert!(err.status_code.is_none());
        }
    }

    #[test]
    fn test_query_database_body() {
        let filter = json!({"property": "Status", "select": {"equals": "Done"}});
        let op = Operation::QueryDatabase {
            database_id: "db1".into(),
            query: DatabaseQuery::new(50).with_filter(filter.clone()),
        };
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.path, "/databases/db1/query");
        assert_eq!(spec.body, Some(json!({"page_size": 50, "filter": filter})));
    }

    #[test]
    fn test_query_database_without_filter_omits_key() {
        let op = Operation::QueryDatabase {
            database_id: "db1".into(),
            query: DatabaseQuery::new(100),
        };
        let body = build(&creds(), &op).unwrap().body.unwrap();
        assert_eq!(body, json!({"page_size": 100}));
        assert!(body.get("filter").is_none());
    }

    #[test]
    fn test_search_body_with_type() {
        let op = Operation::Search(SearchRequest::new("notes", Some(ObjectType::Page)));
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.path, "/search");
        assert_eq!(
            spec.body,
            Some(json!({
                "query": "notes",
                "filter": {"property": "object", "value": "page"},
                "sort": {"direction": "descending", "timestamp": "last_edited_time"}
            }))
        );
    }

    #[test]
    fn test_search_body_without_type() {
        let op = Operation::Search(SearchRequest::new("", None));
        let body = build(&creds(), &op).unwrap().body.unwrap();
        assert_eq!(
            body,
            json!({
                "query": "",
                "filter": {},
                "sort": {"direction": "descending", "timestamp": "last_edited_time"}
            })
        );
    }

    #[test]
    fn test_archive_matches_update_with_archived() {
        let archive = build(&creds(), &Operation::ArchivePage { page_id: "p1".into() }).unwrap();
        let update = build(
            &creds(),
            &Operation::UpdatePage {
                page_id: "p1".into(),
                update: UpdatePage::archive(),
            },
        )
        .unwrap();

        assert_eq!(archive, update);
        assert_eq!(archive.method, Method::Patch);
        assert_eq!(archive.body, Some(json!({"archived": true})));
    }

    #[test]
    fn test_create_page_body() {
        let op = Operation::CreatePage(CreatePage::new(
            Parent::page("parent1"),
            title_property("Meeting notes"),
        ));
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.path, "/pages");
        assert_eq!(
            spec.body,
            Some(json!({
                "parent": {"page_id": "parent1"},
                "properties": {
                    "title": {"title": [{"text": {"content": "Meeting notes"}}]}
                }
            }))
        );
    }

    #[test]
    fn test_create_database_body() {
        let op = Operation::CreateDatabase(CreateDatabase::new("parent1", "Tasks"));
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.path, "/databases");
        assert_eq!(
            spec.body,
            Some(json!({
                "parent": {"page_id": "parent1"},
                "title": [{"text": {"content": "Tasks"}}],
                "properties": {"Name": {"title": {}}}
            }))
        );
    }

    #[test]
    fn test_append_children_body() {
        let op = Operation::AppendBlockChildren {
            block_id: "b1".into(),
            children: vec![paragraph("hello")],
        };
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.method, Method::Patch);
        assert_eq!(spec.path, "/blocks/b1/children");
        assert_eq!(
            spec.body,
            Some(json!({
                "children": [{
                    "object": "block",
                    "type": "paragraph",
                    "paragraph": {"rich_text": [{"text": {"content": "hello"}}]}
                }]
            }))
        );
    }

    #[test]
    fn test_block_children_query() {
        let op = Operation::GetBlockChildren {
            block_id: "b1".into(),
            params: ChildrenQuery::new(25),
        };
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.method, Method::Get);
        assert!(spec.body.is_none());
        let query = spec.query.unwrap();
        assert_eq!(query.get("page_size").map(String::as_str), Some("25"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_list_users_without_params_has_no_query() {
        let spec = build(&creds(), &Operation::ListUsers(UsersQuery::default())).unwrap();
        assert_eq!(spec.path, "/users");
        assert!(spec.query.is_none());
    }

    #[test]
    fn test_delete_block() {
        let spec = build(&creds(), &Operation::DeleteBlock { block_id: "b1".into() }).unwrap();
        assert_eq!(spec.method, Method::Delete);
        assert_eq!(spec.path, "/blocks/b1");
        assert!(spec.body.is_none());
    }

    #[test]
    fn test_update_database_passes_body_through() {
        let update = json!({"title": [{"text": {"content": "Renamed"}}]});
        let op = Operation::UpdateDatabase {
            database_id: "d1".into(),
            update: update.clone(),
        };
        let spec = build(&creds(), &op).unwrap();
        assert_eq!(spec.method, Method::Patch);
        assert_eq!(spec.path, "/databases/d1");
        assert_eq!(spec.body, Some(update));
    }
}
