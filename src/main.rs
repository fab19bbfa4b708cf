//
//  notion-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use notion_cli::api::ApiError;
use notion_cli::cli::{Cli, Commands, UsageError};
use notion_cli::exit_codes;
use notion_cli::output::OutputWriter;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::text().write_error(&format!("{e:#}"));
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("NOTION_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps a failure to the process exit status.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(api_err) = err.downcast_ref::<ApiError>() {
        api_err.exit_code()
    } else if err.downcast_ref::<UsageError>().is_some() {
        exit_codes::USAGE
    } else {
        exit_codes::ERROR
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Pages(cmd) => cmd.run(&cli.global).await,
        Commands::Databases(cmd) => cmd.run(&cli.global).await,
        Commands::Blocks(cmd) => cmd.run(&cli.global).await,
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Users(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("notion version {}", notion_cli::VERSION);
            Ok(())
        }
    }
}
