//
//  notion-cli
//  output/summary.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Text views over raw Notion objects.
//!
//! Each view borrows the response exactly as Notion returned it. Serializing
//! a view yields that response unchanged, so `--json` stays a pass-through;
//! only the text form is shaped here.

use console::style;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::api::ListResponse;

use super::{print_field, print_header, print_success, truncate, TableBuilder, TableOutput};

/// Title shown for objects without one.
pub const UNTITLED: &str = "Untitled";

const TITLE_WIDTH: usize = 40;

/// Returns `plain_text` of the first element of a rich-text array.
pub fn first_plain_text(rich_text: &Value) -> Option<&str> {
    rich_text
        .get(0)?
        .get("plain_text")?
        .as_str()
        .filter(|s| !s.is_empty())
}

/// Returns the display title of a page or database.
///
/// Pages keep their title in a title-typed property, usually named `title`
/// or `Name`; databases keep it in a top-level `title` array.
pub fn object_title(object: &Value) -> &str {
    let properties = object.get("properties");
    let from_property = |name: &str| {
        properties
            .and_then(|p| p.get(name))
            .and_then(|p| p.get("title"))
            .and_then(first_plain_text)
    };

    from_property("title")
        .or_else(|| from_property("Name"))
        .or_else(|| {
            properties
                .and_then(Value::as_object)?
                .values()
                .find(|p| p.get("type").and_then(Value::as_str) == Some("title"))
                .and_then(|p| p.get("title"))
                .and_then(first_plain_text)
        })
        .or_else(|| object.get("title").and_then(first_plain_text))
        .unwrap_or(UNTITLED)
}

/// Returns the property names of a database, in the order Notion sent them.
pub fn property_names(database: &Value) -> Vec<&str> {
    database
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| props.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Renders a scalar member for display; missing members render as `-`.
pub fn field(object: &Value, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

fn print_url(object: &Value, color: bool) {
    let url = field(object, "url");
    if color {
        print_field("URL", &style(url).blue().to_string(), color);
    } else {
        print_field("URL", &url, color);
    }
}

fn print_title(title: &str, color: bool) {
    if color {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

fn print_total(label: &str, list: &ListResponse, color: bool) {
    let line = format!("{}: {}", label, list.results.len());
    if color {
        println!("{}", style(line).cyan());
    } else {
        println!("{}", line);
    }
    println!();
}

fn print_next_cursor(list: &ListResponse, color: bool) {
    if let Some(cursor) = list.next_cursor().filter(|_| list.has_next()) {
        println!();
        let hint = format!("More results available. Next cursor: {}", cursor);
        if color {
            println!("{}", style(hint).dim());
        } else {
            println!("{}", hint);
        }
    }
}

/// A page object.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PageView<'a>(pub &'a Value);

impl TableOutput for PageView<'_> {
    fn print_table(&self, color: bool) {
        let page = self.0;
        print_header("Page Details");
        print_title(object_title(page), color);
        print_field("ID", &field(page, "id"), color);
        print_field("Created", &field(page, "created_time"), color);
        print_field("Last edited", &field(page, "last_edited_time"), color);
        print_field("Archived", &field(page, "archived"), color);
        print_url(page, color);
    }
}

/// A database object.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct DatabaseView<'a>(pub &'a Value);

impl TableOutput for DatabaseView<'_> {
    fn print_table(&self, color: bool) {
        let database = self.0;
        print_header("Database Details");
        print_title(object_title(database), color);
        print_field("ID", &field(database, "id"), color);
        print_field("Created", &field(database, "created_time"), color);
        print_field("Last edited", &field(database, "last_edited_time"), color);
        print_url(database, color);
        println!();
        println!("Properties: {}", property_names(database).join(", "));
    }
}

/// A block object.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BlockView<'a>(pub &'a Value);

impl TableOutput for BlockView<'_> {
    fn print_table(&self, color: bool) {
        let block = self.0;
        print_header("Block Details");
        print_field("ID", &field(block, "id"), color);
        print_field("Type", &field(block, "type"), color);
        print_field("Created", &field(block, "created_time"), color);
        print_field("Has children", &field(block, "has_children"), color);
    }
}

/// One page of block children.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BlockChildrenView<'a>(pub &'a Value);

impl TableOutput for BlockChildrenView<'_> {
    fn print_table(&self, color: bool) {
        let list = ListResponse::from_value(self.0);
        print_total("Total children", &list, color);
        if list.results.is_empty() {
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["#", "TYPE", "ID"])
            .rows(list.results.iter().enumerate().map(|(idx, block)| {
                vec![(idx + 1).to_string(), field(block, "type"), field(block, "id")]
            }))
            .print();
        print_next_cursor(&list, color);
    }
}

/// One page of database query results.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct QueryResultsView<'a>(pub &'a Value);

impl TableOutput for QueryResultsView<'_> {
    fn print_table(&self, color: bool) {
        let list = ListResponse::from_value(self.0);
        print_total("Total results", &list, color);
        if list.results.is_empty() {
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["#", "TITLE", "ID", "URL"])
            .rows(list.results.iter().enumerate().map(|(idx, page)| {
                vec![
                    (idx + 1).to_string(),
                    truncate(object_title(page), TITLE_WIDTH),
                    field(page, "id"),
                    field(page, "url"),
                ]
            }))
            .print();
        print_next_cursor(&list, color);
    }
}

/// One page of search results, mixing pages and databases.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SearchResultsView<'a>(pub &'a Value);

impl TableOutput for SearchResultsView<'_> {
    fn print_table(&self, color: bool) {
        let list = ListResponse::from_value(self.0);
        print_total("Total results", &list, color);
        if list.results.is_empty() {
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["#", "TITLE", "TYPE", "ID", "URL"])
            .rows(list.results.iter().enumerate().map(|(idx, item)| {
                vec![
                    (idx + 1).to_string(),
                    truncate(object_title(item), TITLE_WIDTH),
                    field(item, "object"),
                    field(item, "id"),
                    field(item, "url"),
                ]
            }))
            .print();
        print_next_cursor(&list, color);
    }
}

/// Email of a person user; bots have none.
pub fn user_email(user: &Value) -> String {
    user.get("person")
        .and_then(|p| p.get("email"))
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}

/// A user object.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UserView<'a>(pub &'a Value);

impl TableOutput for UserView<'_> {
    fn print_table(&self, color: bool) {
        let user = self.0;
        print_header("User Details");
        print_title(&field(user, "name"), color);
        print_field("ID", &field(user, "id"), color);
        print_field("Type", &field(user, "type"), color);
        print_field("Email", &user_email(user), color);
    }
}

/// One page of workspace users.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UserListView<'a>(pub &'a Value);

impl TableOutput for UserListView<'_> {
    fn print_table(&self, color: bool) {
        let list = ListResponse::from_value(self.0);
        print_total("Total users", &list, color);
        if list.results.is_empty() {
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["NAME", "TYPE", "ID", "EMAIL"])
            .rows(list.results.iter().map(|user| {
                vec![field(user, "name"), field(user, "type"), field(user, "id"), user_email(user)]
            }))
            .print();
        print_next_cursor(&list, color);
    }
}

/// Confirmation for a mutating command: a success line, then the new
/// object's title, ID and URL when the response carries them.
#[derive(Debug)]
pub struct Confirmation<'a> {
    raw: &'a Value,
    message: String,
    title: Option<String>,
}

impl<'a> Confirmation<'a> {
    pub fn new(raw: &'a Value, message: impl Into<String>) -> Self {
        Self {
            raw,
            message: message.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Serialize for Confirmation<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl TableOutput for Confirmation<'_> {
    fn print_table(&self, color: bool) {
        print_success(&self.message, color);

        if let Some(title) = &self.title {
            println!();
            print_title(title, color);
        }
        if self.raw.get("id").is_some() {
            print_field("ID", &field(self.raw, "id"), color);
        }
        if self.raw.get("url").is_some() {
            print_url(self.raw, color);
        }
    }
}
