//
//  notion-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! This module renders Notion results for the terminal in one of two formats:
//!
//! - **Text format**: Human-readable summaries and tables for interactive use
//! - **JSON format**: The exact JSON Notion returned, pretty-printed, for scripting
//!
//! ## Architecture
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`summary`]: Text views over raw page, database, block and user objects
//! - [`progress`]: Spinners shown while a request is in flight
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: Enum representing the available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for views that know how to print themselves as text
//!
//! ## Example
//!
//! ```rust,ignore
//! use notion_cli::output::{OutputWriter, PageView};
//!
//! let writer = OutputWriter::from_json_flag(global.json);
//! writer.write(&PageView(&page))?;
//! ```

mod progress;
mod summary;
mod table;

pub use progress::*;
pub use summary::*;
pub use table::*;

use serde::Serialize;

/// Represents the available output formats for CLI output.
///
/// # Variants
///
/// * `Text` - Human-readable summaries and tables
/// * `Json` - The raw response, pretty-printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output with optional color support.
    #[default]
    Text,
    /// JSON pass-through for scripting and automation.
    ///
    /// Output is pretty-printed with two-space indentation and keeps the key
    /// order Notion sent.
    Json,
}

/// A unified output writer for data, status messages and errors.
///
/// # Example
///
/// ```rust,ignore
/// use notion_cli::output::OutputWriter;
///
/// let writer = OutputWriter::text();
/// writer.write_success("Set baseURL = https://api.notion.com/v1");
/// writer.write_error("Notion API Error: 404 - {...}");
/// ```
///
/// # Notes
///
/// Color output is automatically detected based on terminal capabilities.
/// Colors are disabled when output is piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a new output writer with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Creates a new output writer configured for JSON output.
    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    /// Creates a new output writer configured for text output.
    pub fn text() -> Self {
        Self::new(OutputFormat::Text)
    }

    /// Picks the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::json()
        } else {
            Self::text()
        }
    }

    /// Writes a value to stdout using the configured output format.
    ///
    /// # Parameters
    ///
    /// * `value` - A view that serializes to the raw response and prints a text summary
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails (only applicable for JSON format).
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(value)?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                value.print_table(self.color);
            }
        }
        Ok(())
    }

    /// Writes an error message to stderr, in red when color is enabled.
    ///
    /// # Notes
    ///
    /// Error messages are always written to stderr, regardless of output format.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{}", style(msg).red());
        } else {
            eprintln!("{}", msg);
        }
    }

    /// Writes a success message to stdout.
    ///
    /// The message is prefixed with a green checkmark when color output
    /// is enabled.
    pub fn write_success(&self, msg: &str) {
        print_success(msg, self.color);
    }
}

/// A trait for views that can be rendered as human-readable text.
///
/// JSON output goes through [`Serialize`] instead, so a view only has to
/// describe its text form.
///
/// # Example
///
/// ```rust,ignore
/// use notion_cli::output::{TableOutput, print_field, print_header};
///
/// impl TableOutput for BlockView<'_> {
///     fn print_table(&self, color: bool) {
///         print_header("Block Details");
///         print_field("Type", block_type(self.0), color);
///     }
/// }
/// ```
pub trait TableOutput {
    /// Renders the view as text.
    ///
    /// # Parameters
    ///
    /// * `color` - Whether color output is enabled
    fn print_table(&self, color: bool);
}

/// Prints a styled header with an underline.
///
/// # Example
///
/// ```rust,ignore
/// use notion_cli::output::print_header;
///
/// print_header("Page Details");
/// // Output:
/// // Page Details
/// // ------------
/// ```
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints `msg` after a checkmark, green and bold when color is enabled.
pub fn print_success(msg: &str, color: bool) {
    use console::style;
    if color {
        println!("{} {}", style("✓").green().bold(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Prints an indented key-value pair, dimming the key when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("  {}: {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_json_flag() {
        assert_eq!(OutputWriter::from_json_flag(true).format, OutputFormat::Json);
        assert_eq!(OutputWriter::from_json_flag(false).format, OutputFormat::Text);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
