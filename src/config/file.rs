//
//  notion-cli
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations used by [`FileConfigStore`](super::FileConfigStore).
//! Write operations create parent directories as needed.

use std::path::Path;

use anyhow::Result;

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Fails if the file does not exist, cannot be opened, or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Writes `content` to a configuration file, creating parent directories.
///
/// Existing files are overwritten.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Checks if a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
