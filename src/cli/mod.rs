//
//  notion-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod blocks;
mod config;
mod databases;
mod pages;
mod search;
mod users;

pub use blocks::BlocksCommand;
pub use config::ConfigCommand;
pub use databases::DatabasesCommand;
pub use pages::PagesCommand;
pub use search::SearchCommand;
pub use users::UsersCommand;

use std::future::Future;

use anyhow::Result;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::api::{self, NotionClient};
use crate::config::FileConfigStore;
use crate::output::Spinner;

/// Work with Notion from the command line
#[derive(Parser, Debug)]
#[command(
    name = "notion",
    version,
    about = "Work with Notion from the command line",
    long_about = "notion is a CLI for the Notion API.\n\n\
                  It reads and writes pages, databases and blocks, searches the \
                  workspace and lists users.",
    propagate_version = true,
    after_help = "Use 'notion <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Print the raw API response as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Manage Notion pages
    #[command(visible_alias = "p")]
    Pages(PagesCommand),

    /// Manage Notion databases
    #[command(visible_alias = "db")]
    Databases(DatabasesCommand),

    /// Manage Notion blocks
    #[command(visible_alias = "b")]
    Blocks(BlocksCommand),

    /// Search the Notion workspace
    Search(SearchCommand),

    /// List and view workspace users
    #[command(visible_alias = "u")]
    Users(UsersCommand),

    /// Show version information
    Version,
}

/// An argument value that parsed but is not acceptable.
///
/// Exits with [`exit_codes::USAGE`](crate::exit_codes::USAGE).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Creates a client from the stored configuration and the environment.
fn notion_client() -> Result<NotionClient> {
    let store = FileConfigStore::load()?;
    Ok(NotionClient::from_store(&store)?)
}

/// Awaits one request behind a spinner.
///
/// The spinner is hidden with `--json`. On failure the [`api::ApiError`] is
/// passed through untouched so `main` can pick the exit code.
async fn with_spinner<T, F>(
    global: &GlobalOptions,
    message: &str,
    done: &str,
    failed: &str,
    request: F,
) -> Result<T>
where
    F: Future<Output = api::Result<T>>,
{
    let spinner = Spinner::start(message, !global.json);
    match request.await {
        Ok(value) => {
            spinner.succeed(done);
            Ok(value)
        }
        Err(err) => {
            spinner.fail(failed);
            Err(err.into())
        }
    }
}
