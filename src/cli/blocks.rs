//
//  notion-cli
//  cli/blocks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Block commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::blocks::{paragraph, ChildrenQuery};
use crate::api::databases::DEFAULT_PAGE_SIZE;
use crate::output::{BlockChildrenView, BlockView, Confirmation, OutputWriter};

use super::{notion_client, with_spinner, GlobalOptions};

/// Manage Notion blocks
#[derive(Args, Debug)]
pub struct BlocksCommand {
    #[command(subcommand)]
    pub command: BlocksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BlocksSubcommand {
    /// Get block details
    Get(BlockArgs),

    /// Get block children
    Children(ChildrenArgs),

    /// Append a paragraph to a block
    Append(AppendArgs),

    /// Delete a block
    Delete(BlockArgs),
}

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// Block ID
    pub block_id: String,
}

#[derive(Args, Debug)]
pub struct ChildrenArgs {
    /// Block or page ID
    pub block_id: String,

    /// Results per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Cursor from a previous response's next_cursor
    #[arg(long)]
    pub start_cursor: Option<String>,
}

#[derive(Args, Debug)]
pub struct AppendArgs {
    /// Block or page ID
    pub block_id: String,

    /// Text content to append
    #[arg(long)]
    pub text: String,
}

impl BlocksCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BlocksSubcommand::Get(args) => self.get(args, global).await,
            BlocksSubcommand::Children(args) => self.children(args, global).await,
            BlocksSubcommand::Append(args) => self.append(args, global).await,
            BlocksSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn get(&self, args: &BlockArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let block = with_spinner(
            global,
            "Fetching block...",
            "Block fetched",
            "Failed to fetch block",
            client.get_block(&args.block_id),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&BlockView(&block))
    }

    async fn children(&self, args: &ChildrenArgs, global: &GlobalOptions) -> Result<()> {
        let mut params = ChildrenQuery::new(args.page_size);
        if let Some(cursor) = &args.start_cursor {
            params = params.with_start_cursor(cursor);
        }

        let client = notion_client()?;
        let children = with_spinner(
            global,
            "Fetching children...",
            "Children fetched",
            "Failed to fetch children",
            client.get_block_children(&args.block_id, params),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&BlockChildrenView(&children))
    }

    async fn append(&self, args: &AppendArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let result = with_spinner(
            global,
            "Appending block...",
            "Block appended",
            "Failed to append block",
            client.append_block_children(&args.block_id, vec![paragraph(&args.text)]),
        )
        .await?;

        OutputWriter::from_json_flag(global.json)
            .write(&Confirmation::new(&result, "Block appended successfully!"))
    }

    async fn delete(&self, args: &BlockArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let block = with_spinner(
            global,
            "Deleting block...",
            "Block deleted",
            "Failed to delete block",
            client.delete_block(&args.block_id),
        )
        .await?;

        OutputWriter::from_json_flag(global.json)
            .write(&Confirmation::new(&block, format!("Block {} deleted", args.block_id)))
    }
}
