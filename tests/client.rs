//
//  notion-cli
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client tests against a local mock of the Notion API.

use mockito::{Matcher, Server};
use serde_json::{json, Value};

use notion_cli::api::blocks::{paragraph, ChildrenQuery};
use notion_cli::api::databases::{CreateDatabase, DatabaseQuery};
use notion_cli::api::pages::{title_property, CreatePage, Parent, UpdatePage};
use notion_cli::api::search::{ObjectType, SearchRequest};
use notion_cli::api::users::UsersQuery;
use notion_cli::api::{ErrorKind, ListResponse, NotionClient};
use notion_cli::auth::Credentials;
use notion_cli::config::{ConfigStore, MemoryConfigStore, API_TOKEN_KEY, BASE_URL_KEY};

const TOKEN: &str = "secret_test_token";

fn client_for(server: &Server) -> NotionClient {
    NotionClient::new(Credentials::new(server.url(), Some(TOKEN.to_string()))).unwrap()
}

#[tokio::test]
async fn test_get_page_sends_auth_and_version_headers() {
    let mut server = Server::new_async().await;
    let body = r#"{"object":"page","id":"p1","url":"https://www.notion.so/p1","archived":false}"#;
    let mock = server
        .mock("GET", "/pages/p1")
        .match_header("authorization", "Bearer secret_test_token")
        .match_header("notion-version", "2022-06-28")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let page = client_for(&server).get_page("p1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(page, serde_json::from_str::<Value>(body).unwrap());
}

#[tokio::test]
async fn test_response_is_passed_through_unchanged() {
    let mut server = Server::new_async().await;
    let body = json!({
        "object": "database",
        "id": "d1",
        "properties": {"Zeta": {"type": "title"}, "Alpha": {"type": "checkbox"}},
        "custom_field": [1, 2, {"nested": null}]
    });
    let mock = server
        .mock("GET", "/databases/d1")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let database = client_for(&server).get_database("d1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(database, body);
    let keys: Vec<&String> = database["properties"].as_object().unwrap().keys().collect();
    assert_eq!(keys, ["Zeta", "Alpha"]);
}

#[tokio::test]
async fn test_create_page_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/pages")
        .match_body(Matcher::Json(json!({
            "parent": {"page_id": "parent-1"},
            "properties": {"title": {"title": [{"text": {"content": "Meeting notes"}}]}}
        })))
        .with_status(200)
        .with_body(r#"{"object":"page","id":"p2"}"#)
        .create_async()
        .await;

    let request = CreatePage::new(Parent::page("parent-1"), title_property("Meeting notes"));
    let page = client_for(&server).create_page(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page["id"], "p2");
}

#[tokio::test]
async fn test_archive_page_patches_archived_flag() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/pages/p1")
        .match_body(Matcher::Json(json!({"archived": true})))
        .with_status(200)
        .with_body(r#"{"object":"page","id":"p1","archived":true}"#)
        .create_async()
        .await;

    let page = client_for(&server).archive_page("p1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(page["archived"], true);
}

#[tokio::test]
async fn test_update_page_without_changes_sends_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/pages/p1")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"object":"page","id":"p1"}"#)
        .create_async()
        .await;

    client_for(&server)
        .update_page("p1", UpdatePage::default())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_database_with_filter() {
    let mut server = Server::new_async().await;
    let filter = json!({"property": "Done", "checkbox": {"equals": true}});
    let mock = server
        .mock("POST", "/databases/d1/query")
        .match_body(Matcher::Json(json!({"page_size": 100, "filter": filter})))
        .with_status(200)
        .with_body(r#"{"object":"list","results":[{"id":"r1"}],"has_more":true,"next_cursor":"c2"}"#)
        .create_async()
        .await;

    let result = client_for(&server)
        .query_database("d1", DatabaseQuery::default().with_filter(filter.clone()))
        .await
        .unwrap();

    mock.assert_async().await;
    let list = ListResponse::from_value(&result);
    assert_eq!(list.results.len(), 1);
    assert!(list.has_next());
    assert_eq!(list.next_cursor(), Some("c2"));
}

#[tokio::test]
async fn test_query_database_without_filter_omits_member() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/databases/d1/query")
        .match_body(Matcher::Json(json!({"page_size": 10})))
        .with_status(200)
        .with_body(r#"{"object":"list","results":[],"has_more":false,"next_cursor":null}"#)
        .create_async()
        .await;

    client_for(&server)
        .query_database("d1", DatabaseQuery::new(10))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_database_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/databases")
        .match_body(Matcher::Json(json!({
            "parent": {"page_id": "parent-1"},
            "title": [{"text": {"content": "Tasks"}}],
            "properties": {"Name": {"title": {}}}
        })))
        .with_status(200)
        .with_body(r#"{"object":"database","id":"d2"}"#)
        .create_async()
        .await;

    client_for(&server)
        .create_database(CreateDatabase::new("parent-1", "Tasks"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_database_forwards_body() {
    let mut server = Server::new_async().await;
    let update = json!({"title": [{"text": {"content": "Renamed"}}]});
    let mock = server
        .mock("PATCH", "/databases/d1")
        .match_body(Matcher::Json(update.clone()))
        .with_status(200)
        .with_body(r#"{"object":"database","id":"d1"}"#)
        .create_async()
        .await;

    client_for(&server).update_database("d1", update).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_block_children_sends_page_size() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/blocks/b1/children")
        .match_query(Matcher::UrlEncoded("page_size".into(), "25".into()))
        .with_status(200)
        .with_body(r#"{"object":"list","results":[{"id":"c1","type":"paragraph"}],"has_more":false}"#)
        .create_async()
        .await;

    let children = client_for(&server)
        .get_block_children("b1", ChildrenQuery::new(25))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(children["results"][0]["type"], "paragraph");
}

#[tokio::test]
async fn test_append_block_children_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/blocks/b1/children")
        .match_body(Matcher::Json(json!({
            "children": [{
                "object": "block",
                "type": "paragraph",
                "paragraph": {"rich_text": [{"text": {"content": "Hello"}}]}
            }]
        })))
        .with_status(200)
        .with_body(r#"{"object":"list","results":[]}"#)
        .create_async()
        .await;

    client_for(&server)
        .append_block_children("b1", vec![paragraph("Hello")])
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_block() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/blocks/b1")
        .with_status(200)
        .with_body(r#"{"object":"block","id":"b1","archived":true}"#)
        .create_async()
        .await;

    let block = client_for(&server).delete_block("b1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(block["archived"], true);
}

#[tokio::test]
async fn test_search_with_type_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::Json(json!({
            "query": "notes",
            "filter": {"property": "object", "value": "database"},
            "sort": {"direction": "descending", "timestamp": "last_edited_time"}
        })))
        .with_status(200)
        .with_body(r#"{"object":"list","results":[]}"#)
        .create_async()
        .await;

    client_for(&server)
        .search(SearchRequest::new("notes", Some(ObjectType::Database)))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_without_type_sends_empty_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::Json(json!({
            "query": "",
            "filter": {},
            "sort": {"direction": "descending", "timestamp": "last_edited_time"}
        })))
        .with_status(200)
        .with_body(r#"{"object":"list","results":[]}"#)
        .create_async()
        .await;

    client_for(&server)
        .search(SearchRequest::new("", None))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_and_get_users() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/users")
        .with_status(200)
        .with_body(r#"{"object":"list","results":[{"object":"user","id":"u1"}]}"#)
        .create_async()
        .await;
    let get = server
        .mock("GET", "/users/u1")
        .with_status(200)
        .with_body(r#"{"object":"user","id":"u1","type":"person"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let users = client.list_users(UsersQuery::default()).await.unwrap();
    let user = client.get_user("u1").await.unwrap();

    list.assert_async().await;
    get.assert_async().await;
    assert_eq!(users["results"][0]["id"], "u1");
    assert_eq!(user["type"], "person");
}

#[tokio::test]
async fn test_not_found_is_api_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/pages/missing")
        .with_status(404)
        .with_body(r#"{"message":"not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_page("missing").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::ApiFailure);
    assert_eq!(err.status_code, Some(404));
    assert_eq!(err.raw, Some(json!({"message": "not found"})));
    assert!(err.message.contains("404"));
    assert!(err.message.contains("not found"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_string() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = client_for(&server)
        .list_users(UsersQuery::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::ApiFailure);
    assert_eq!(err.status_code, Some(502));
    assert_eq!(err.raw, Some(Value::String("Bad Gateway".into())));
}

#[tokio::test]
async fn test_undecodable_success_body_is_transport_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/blocks/b1")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = client_for(&server).get_block("b1").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Transport);
    assert!(err.status_code.is_none());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let credentials = Credentials::new("http://127.0.0.1:1", Some(TOKEN.to_string()));
    let client = NotionClient::new(credentials).unwrap();

    let err = client.get_block("b1").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Transport);
    assert!(err.status_code.is_none());
    assert!(err.raw.is_none());
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn test_missing_token_fails_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = NotionClient::new(Credentials::new(server.url(), None)).unwrap();
    let err = client.get_page("p1").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(err.message.contains("API token not configured"));
}

#[tokio::test]
async fn test_credentials_from_store() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer stored_token")
        .with_status(200)
        .with_body(r#"{"object":"user","id":"me"}"#)
        .create_async()
        .await;

    let mut store = MemoryConfigStore::new();
    store.set(BASE_URL_KEY, &server.url()).unwrap();
    store.set(API_TOKEN_KEY, "stored_token").unwrap();

    let client = NotionClient::from_store(&store).unwrap();
    client.get_user("me").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_id_with_path_characters_stays_on_its_endpoint() {
    let mut server = Server::new_async().await;
    let users = server
        .mock("GET", "/users")
        .expect(0)
        .create_async()
        .await;
    let pages = server
        .mock("GET", Matcher::Regex(r"^/pages/".to_string()))
        .with_status(400)
        .with_body(r#"{"object":"error","status":400,"code":"validation_error"}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_page("../users").await.unwrap_err();

    users.assert_async().await;
    pages.assert_async().await;
    assert_eq!(err.kind, ErrorKind::ApiFailure);
    assert_eq!(err.status_code, Some(400));
}
