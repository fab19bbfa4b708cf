//
//  notion-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! This module provides commands for managing the stored configuration:
//! the API base URL (`baseURL`) and the integration token (`apiToken`).
//! Values set here take precedence over `NOTION_BASE_URL` and
//! `NOTION_API_TOKEN`.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{mask_token, validate_token};
use crate::config::{ConfigStore, FileConfigStore, API_TOKEN_KEY, BASE_URL_KEY};
use crate::output::OutputWriter;

use super::{GlobalOptions, UsageError};

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Set a configuration value
    Set(SetArgs),

    /// Get a configuration value
    Get(KeyArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Delete a configuration value
    #[command(visible_alias = "unset")]
    Delete(KeyArgs),

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (baseURL or apiToken)
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Delete(args) => self.delete(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    /// Set a configuration value
    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        validate_value(&args.key, &args.value)?;

        let mut store = FileConfigStore::load()?;
        store.set(&args.key, &args.value)?;

        let shown = display_value(&args.key, &args.value);
        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            OutputWriter::text().write_success(&format!("Set {} = {}", args.key, shown));
        }

        Ok(())
    }

    /// Get a configuration value. Text output masks the token, `--json`
    /// prints it as stored.
    fn get(&self, args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
        let store = FileConfigStore::load()?;
        let value = store.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        match value {
            Some(value) => println!(
                "{}",
                style(format!("{} = {}", args.key, display_value(&args.key, &value))).cyan()
            ),
            None => println!("{}", style(format!("{} is not set", args.key)).yellow()),
        }

        Ok(())
    }

    /// List all configuration values
    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let store = FileConfigStore::load()?;
        let values = store.list();

        if global.json {
            println!("{}", serde_json::to_string_pretty(&values)?);
            return Ok(());
        }

        println!("{}", style("Current configuration:").cyan());
        if values.is_empty() {
            println!("  (empty)");
        }
        for (key, value) in &values {
            println!("  {} = {}", key, display_value(key, value));
        }

        Ok(())
    }

    /// Delete a configuration value
    fn delete(&self, args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
        let mut store = FileConfigStore::load()?;
        let deleted = store.delete(&args.key)?;

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "deleted": deleted,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if deleted {
            OutputWriter::text().write_success(&format!("Deleted {}", args.key));
        } else {
            println!("{}", style(format!("{} is not set", args.key)).yellow());
        }

        Ok(())
    }

    /// Show configuration file path
    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = FileConfigStore::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}

/// Rejects values the credential resolver could not use.
fn validate_value(key: &str, value: &str) -> Result<()> {
    match key {
        BASE_URL_KEY => {
            let url = url::Url::parse(value)
                .map_err(|e| UsageError(format!("Invalid {}: {}", BASE_URL_KEY, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(UsageError(format!(
                    "Invalid {}: expected an http or https URL",
                    BASE_URL_KEY
                ))
                .into());
            }
        }
        API_TOKEN_KEY if !validate_token(value) => {
            return Err(UsageError(format!(
                "Invalid {}: must be non-empty and contain no whitespace",
                API_TOKEN_KEY
            ))
            .into());
        }
        _ => {}
    }
    Ok(())
}

fn display_value(key: &str, value: &str) -> String {
    if key == API_TOKEN_KEY {
        mask_token(value)
    } else {
        value.to_string()
    }
}
