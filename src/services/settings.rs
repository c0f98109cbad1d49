//! Persisted key/value settings store.
//!
//! The drawer only reads settings; the preference editor writes them. Values are
//! TOML values keyed by the names in [`crate::constants`].

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Read access to persisted settings.
pub trait SettingsStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<toml::Value>;

    /// Re-reads the backing storage. In-memory stores have nothing to do.
    fn reload(&self) -> Result<()> {
        Ok(())
    }
}

/// Settings persisted as a TOML table on disk.
///
/// A missing file is an empty store. An unreadable or unparsable file is also
/// treated as empty, so callers fall back to their defaults.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    table: RwLock<toml::Table>,
}

impl FileSettingsStore {
    /// Opens the store at `path`, reading it once.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = read_table_or_empty(&path);
        Self {
            path,
            table: RwLock::new(table),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn value(&self, key: &str) -> Option<toml::Value> {
        let table = self
            .table
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        table.get(key).cloned()
    }

    fn reload(&self) -> Result<()> {
        let fresh = read_table(&self.path)?;
        let mut table = self
            .table
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *table = fresh;
        tracing::debug!("Reloaded settings from {}", self.path.display());
        Ok(())
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(toml::Table::new()),
        Err(err) => {
            return Err(err).context(format!("Failed to read settings file: {}", path.display()))
        }
    };

    toml::from_str(&content).context(format!("Failed to parse settings file: {}", path.display()))
}

fn read_table_or_empty(path: &Path) -> toml::Table {
    match read_table(path) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!("{err:#}; using default settings");
            toml::Table::new()
        }
    }
}

/// Settings held in memory, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    table: RwLock<toml::Table>,
}

impl MemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<toml::Value>) {
        let mut table = self
            .table
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        table.insert(key.into(), value.into());
    }

    /// Removes `key` from the store.
    pub fn remove(&self, key: &str) {
        let mut table = self
            .table
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        table.remove(key);
    }
}

impl SettingsStore for MemorySettingsStore {
    fn value(&self, key: &str) -> Option<toml::Value> {
        let table = self
            .table
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        table.get(key).cloned()
    }
}
