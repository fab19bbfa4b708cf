//
//  notion-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides the configuration store for the Notion CLI: a flat,
//! string-keyed set of values persisted across invocations.
//!
//! ## Overview
//!
//! - [`ConfigStore`]: The get/set/delete/list contract the rest of the crate uses
//! - [`FileConfigStore`]: TOML-backed store in the platform config directory
//! - [`MemoryConfigStore`]: In-memory store for tests and embedders
//!
//! The credential resolver receives a store explicitly instead of reaching for
//! global state, so tests can swap in a [`MemoryConfigStore`].
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/notion-cli/config.toml`
//! - **macOS**: `~/Library/Application Support/notion-cli/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\notion-cli\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! apiToken = "secret_0123456789abcdef"
//! baseURL = "https://api.notion.com/v1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use notion_cli::config::{ConfigStore, FileConfigStore};
//!
//! let mut store = FileConfigStore::load()?;
//! store.set("apiToken", "secret_0123456789abcdef")?;
//! assert_eq!(store.get("apiToken").as_deref(), Some("secret_0123456789abcdef"));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Config key holding the API base URL.
pub const BASE_URL_KEY: &str = "baseURL";

/// Config key holding the integration token.
pub const API_TOKEN_KEY: &str = "apiToken";

/// Keys the client core reads. Other keys are stored but unused.
pub const KNOWN_KEYS: &[&str] = &[API_TOKEN_KEY, BASE_URL_KEY];

/// Directory name used under the platform config directory.
const CONFIG_NAMESPACE: &str = "notion-cli";

/// A process-wide, string-keyed settings store.
///
/// Implementations decide where values live. Mutations on persistent
/// implementations are durable once the call returns.
pub trait ConfigStore {
    /// Returns the value for `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Returns whether it was present.
    fn delete(&mut self, key: &str) -> Result<bool>;

    /// Returns every key/value pair, sorted by key.
    fn list(&self) -> BTreeMap<String, String>;
}

/// Returns true if the client core reads `key`.
pub fn is_known_key(key: &str) -> bool {
    KNOWN_KEYS.contains(&key)
}

/// In-memory [`ConfigStore`].
///
/// # Example
///
/// ```rust
/// use notion_cli::config::{ConfigStore, MemoryConfigStore};
///
/// let mut store = MemoryConfigStore::new();
/// store.set("baseURL", "http://localhost:8080/v1").unwrap();
/// assert!(store.delete("baseURL").unwrap());
/// assert!(store.get("baseURL").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: BTreeMap<String, String>,
}

impl MemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }

    fn list(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

/// TOML-file-backed [`ConfigStore`].
///
/// Values are read once on open and written back on every `set` or `delete`.
/// A missing file is an empty store; the file and its parent directory are
/// created on the first write.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileConfigStore {
    /// Opens the store at the default location.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::open(Self::config_path()?)
    }

    /// Opens the store backed by `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if config_exists(&path) {
            let content = read_config_file(&path)?;
            toml::from_str(&content)
                .with_context(|| format!("Invalid configuration file {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Returns the path of the default configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", CONFIG_NAMESPACE)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.values)?;
        write_config_file(&self.path, &content)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !is_known_key(key) {
            tracing::warn!(key, "setting unknown configuration key");
        }
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        let existed = self.values.remove(key).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    fn list(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::open(dir.path().join("config.toml")).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut store = FileConfigStore::open(&path).unwrap();
        store.set(API_TOKEN_KEY, "secret_abc").unwrap();
        store.set(BASE_URL_KEY, "http://localhost/v1").unwrap();

        let reopened = FileConfigStore::open(&path).unwrap();
        assert_eq!(reopened.get(API_TOKEN_KEY).as_deref(), Some("secret_abc"));
        assert_eq!(reopened.list().len(), 2);
    }

    #[test]
    fn test_file_store_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = FileConfigStore::open(&path).unwrap();
        store.set(API_TOKEN_KEY, "secret_abc").unwrap();
        assert!(store.delete(API_TOKEN_KEY).unwrap());
        assert!(!store.delete(API_TOKEN_KEY).unwrap());

        let reopened = FileConfigStore::open(&path).unwrap();
        assert!(reopened.get(API_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_file_store_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(FileConfigStore::open(&path).is_err());
    }

    #[test]
    fn test_known_keys() {
        assert!(is_known_key("apiToken"));
        assert!(is_known_key("baseURL"));
        assert!(!is_known_key("editor"));
    }
}
