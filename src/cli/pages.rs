//
//  notion-cli
//  cli/pages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Page commands
//!
//! Retrieve, create, retitle and archive pages. New pages are created under
//! a parent page by default, or as a row of a database with `--database`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::pages::{title_property, CreatePage, Parent, UpdatePage};
use crate::output::{Confirmation, OutputWriter, PageView};

use super::{notion_client, with_spinner, GlobalOptions};

/// Title given to pages created without `--title`
const DEFAULT_PAGE_TITLE: &str = "Untitled";

/// Manage Notion pages
#[derive(Args, Debug)]
pub struct PagesCommand {
    #[command(subcommand)]
    pub command: PagesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PagesSubcommand {
    /// Get page details
    Get(GetArgs),

    /// Create a new page
    Create(CreateArgs),

    /// Update page properties
    Update(UpdateArgs),

    /// Archive a page
    Archive(ArchiveArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Page ID
    pub page_id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Parent page or database ID
    #[arg(long)]
    pub parent_id: String,

    /// Page title
    #[arg(long, default_value = DEFAULT_PAGE_TITLE)]
    pub title: String,

    /// Treat the parent as a database and create the page as a row
    #[arg(long)]
    pub database: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Page ID
    pub page_id: String,

    /// New page title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// Page ID
    pub page_id: String,
}

impl PagesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PagesSubcommand::Get(args) => self.get(args, global).await,
            PagesSubcommand::Create(args) => self.create(args, global).await,
            PagesSubcommand::Update(args) => self.update(args, global).await,
            PagesSubcommand::Archive(args) => self.archive(args, global).await,
        }
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let page = with_spinner(
            global,
            "Fetching page...",
            "Page fetched",
            "Failed to fetch page",
            client.get_page(&args.page_id),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&PageView(&page))
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let parent = if args.database {
            Parent::database(&args.parent_id)
        } else {
            Parent::page(&args.parent_id)
        };
        let request = CreatePage::new(parent, title_property(&args.title));

        let page = with_spinner(
            global,
            "Creating page...",
            "Page created",
            "Failed to create page",
            client.create_page(request),
        )
        .await?;

        OutputWriter::from_json_flag(global.json)
            .write(&Confirmation::new(&page, "Page created successfully!").with_title(&args.title))
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let update = match &args.title {
            Some(title) => UpdatePage::properties(title_property(title)),
            None => UpdatePage::default(),
        };

        let page = with_spinner(
            global,
            "Updating page...",
            "Page updated",
            "Failed to update page",
            client.update_page(&args.page_id, update),
        )
        .await?;

        OutputWriter::from_json_flag(global.json)
            .write(&Confirmation::new(&page, "Page updated successfully!"))
    }

    async fn archive(&self, args: &ArchiveArgs, global: &GlobalOptions) -> Result<()> {
        let client = notion_client()?;
        let page = with_spinner(
            global,
            "Archiving page...",
            "Page archived",
            "Failed to archive page",
            client.archive_page(&args.page_id),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&Confirmation::new(
            &page,
            format!("Page {} archived", args.page_id),
        ))
    }
}
