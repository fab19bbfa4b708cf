//
//  notion-cli
//  cli/databases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Database commands
//!
//! Retrieve, query, create and update databases. Query filters and update
//! bodies are given as JSON strings and sent to Notion as-is.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::{json, Map, Value};

use crate::api::databases::{CreateDatabase, DatabaseQuery, DEFAULT_PAGE_SIZE};
use crate::output::{Confirmation, DatabaseView, OutputWriter, QueryResultsView};

use super::{notion_client, with_spinner, GlobalOptions, UsageError};

/// Title given to databases created without `--title`
const DEFAULT_DATABASE_TITLE: &str = "New Database";

/// Manage Notion databases
#[derive(Args, Debug)]
pub struct DatabasesCommand {
    #[command(subcommand)]
    pub command: DatabasesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DatabasesSubcommand {
    /// Get database details
    Get(GetArgs),

    /// Query database entries
    Query(QueryArgs),

    /// Create a new database
    Create(CreateArgs),

    /// Update a database's title or schema
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Database ID
    pub database_id: String,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Database ID
    pub database_id: String,

    /// Filter as JSON string
    #[arg(long)]
    pub filter: Option<String>,

    /// Results per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Cursor from a previous response's next_cursor
    #[arg(long)]
    pub start_cursor: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Parent page ID
    #[arg(long)]
    pub parent_id: String,

    /// Database title
    #[arg(long, default_value = DEFAULT_DATABASE_TITLE)]
    pub title: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Database ID
    pub database_id: String,

    /// New database title
    #[arg(long)]
    pub title: Option<String>,

    /// Update body as JSON string (title, description, properties)
    #[arg(long, conflicts_with = "title")]
    pub body: Option<String>,
}

impl DatabasesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            DatabasesSubcommand::Get(args) => self.get(args, global).await,
            DatabasesSubcommand::Query(args) => self.query(args, global).await,
            DatabasesSubcommand::Create(args) => self.create(args, global).await,
            DatabasesSubcommand::Update(args) => self.update(args, global).await,
        }
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let database = with_spinner(
            global,
            "Fetching database...",
            "Database fetched",
            "Failed to fetch database",
            client.get_database(&args.database_id),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&DatabaseView(&database))
    }

    async fn query(&self, args: &QueryArgs, global: &GlobalOptions) -> Result<()> {
        let mut query = DatabaseQuery::new(args.page_size);
        if let Some(filter) = &args.filter {
            query = query.with_filter(parse_json_arg("--filter", filter)?);
        }
        if let Some(cursor) = &args.start_cursor {
            query = query.with_start_cursor(cursor);
        }

        let client = notion_client()?;
        let result = with_spinner(
            global,
            "Querying database...",
            "Database queried",
            "Failed to query database",
            client.query_database(&args.database_id, query),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&QueryResultsView(&result))
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let database = with_spinner(
            global,
            "Creating database...",
            "Database created",
            "Failed to create database",
            client.create_database(CreateDatabase::new(&args.parent_id, &args.title)),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(
            &Confirmation::new(&database, "Database created successfully!").with_title(&args.title),
        )
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let update = match (&args.body, &args.title) {
            (Some(body), _) => parse_json_arg("--body", body)?,
            (None, Some(title)) => json!({ "title": [{ "text": { "content": title } }] }),
            (None, None) => Value::Object(Map::new()),
        };

        let client = notion_client()?;
        let database = with_spinner(
            global,
            "Updating database...",
            "Database updated",
            "Failed to update database",
            client.update_database(&args.database_id, update),
        )
        .await?;

        OutputWriter::from_json_flag(global.json)
            .write(&Confirmation::new(&database, "Database updated successfully!"))
    }
}

/// Parses a JSON-valued flag, reporting bad input as a usage error.
fn parse_json_arg(flag: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw)
        .map_err(|e| UsageError(format!("Invalid JSON for {}: {}", flag, e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_arg() {
        let filter = parse_json_arg("--filter", r#"{"property":"Done","checkbox":{"equals":true}}"#)
            .unwrap();
        assert_eq!(filter["property"], "Done");

        let err = parse_json_arg("--filter", "{not json").unwrap_err();
        assert!(err.downcast_ref::<UsageError>().is_some());
        assert!(err.to_string().starts_with("Invalid JSON for --filter"));
    }
}
