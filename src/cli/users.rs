//
//  notion-cli
//  cli/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands
//!
//! List the people and bots in the workspace, or look one up by ID.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::users::UsersQuery;
use crate::output::{OutputWriter, UserListView, UserView};

use super::{notion_client, with_spinner, GlobalOptions};

/// List and view workspace users
#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List workspace users
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Get user details
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Results per page (Notion's default when omitted)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Cursor from a previous response's next_cursor
    #[arg(long)]
    pub start_cursor: Option<String>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User ID
    pub user_id: String,
}

impl UsersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UsersSubcommand::List(args) => self.list(args, global).await,
            UsersSubcommand::Get(args) => self.get(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let mut params = UsersQuery::default();
        if let Some(size) = args.page_size {
            params = params.with_page_size(size);
        }
        if let Some(cursor) = &args.start_cursor {
            params = params.with_start_cursor(cursor);
        }

        let client = notion_client()?;
        let users = with_spinner(
            global,
            "Fetching users...",
            "Users fetched",
            "Failed to fetch users",
            client.list_users(params),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&UserListView(&users))
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let user = with_spinner(
            global,
            "Fetching user...",
            "User fetched",
            "Failed to fetch user",
            client.get_user(&args.user_id),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&UserView(&user))
    }
}
