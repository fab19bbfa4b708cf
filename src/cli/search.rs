//
//  notion-cli
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search command

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::api::search::{ObjectType, SearchRequest};
use crate::output::{OutputWriter, SearchResultsView};

use super::{notion_client, with_spinner, GlobalOptions};

/// Search the Notion workspace
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Text to search for; empty matches everything shared with the integration
    #[arg(default_value = "")]
    pub query: String,

    /// Filter by object type
    #[arg(long = "type", value_enum)]
    pub kind: Option<TypeArg>,

    /// Cursor from a previous response's next_cursor
    #[arg(long)]
    pub start_cursor: Option<String>,
}

/// Values accepted by `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Page,
    Database,
}

impl From<TypeArg> for ObjectType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Page => ObjectType::Page,
            TypeArg::Database => ObjectType::Database,
        }
    }
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut request = SearchRequest::new(&self.query, self.kind.map(ObjectType::from));
        if let Some(cursor) = &self.start_cursor {
            request = request.with_start_cursor(cursor);
        }

        let client = notion_client()?;
        let result = with_spinner(
            global,
            "Searching...",
            "Search completed",
            "Search failed",
            client.search(request),
        )
        .await?;

        OutputWriter::from_json_flag(global.json).write(&SearchResultsView(&result))
    }
}
