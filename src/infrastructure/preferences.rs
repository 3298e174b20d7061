// SPDX-License-Identifier: MPL-2.0
//! Preference store adapters.
//!
//! - [`ConfigStore`]: the `[preferences]` table of `settings.toml`
//! - [`MemoryStore`]: in-process map, optionally simulating unavailable storage

use crate::app::paths;
use crate::application::port::PreferenceStore;
use crate::config::{self, Config};
use crate::error::StorageError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// =============================================================================
// ConfigStore
// =============================================================================

/// Persists preferences into a `settings.toml` file.
///
/// Every write reloads the file first so other sections (and preferences
/// written by other processes) are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `settings.toml` in `config_dir`, or in the default config directory.
    ///
    /// Returns `None` when no config directory can be determined.
    #[must_use]
    pub fn in_config_dir(config_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_config_file_with_override(config_dir).map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unparsable files are an error here: writing back defaults would wipe
    /// every other setting in the file.
    fn load(&self) -> Result<Config, StorageError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        Ok(config::load_from_path_strict(&self.path)?)
    }
}

impl PreferenceStore for ConfigStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.preferences.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut config = self.load()?;
        config.preferences.insert(key.to_string(), value.to_string());
        Ok(config::save_to_path(&config, &self.path)?)
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            values: HashMap::new(),
            available: false,
        }
    }

    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Reads a value directly, bypassing availability.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError("storage disabled".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError("storage disabled".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STORAGE_KEY;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn config_store_missing_file_reads_nothing() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = ConfigStore::in_config_dir(Some(dir.path().to_path_buf())).expect("path");

        assert_eq!(store.read(DEFAULT_STORAGE_KEY), Ok(None));
    }

    #[test]
    fn config_store_write_then_read() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut store = ConfigStore::new(dir.path().join("nested").join("settings.toml"));

        store.write(DEFAULT_STORAGE_KEY, "ta").expect("write succeeds");

        assert_eq!(store.read(DEFAULT_STORAGE_KEY), Ok(Some("ta".to_string())));
        let reopened = ConfigStore::new(store.path());
        assert_eq!(reopened.read(DEFAULT_STORAGE_KEY), Ok(Some("ta".to_string())));
    }

    #[test]
    fn config_store_write_preserves_engine_section() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[engine]\ntoggle_class = \"switcher\"\n").expect("write config");

        let mut store = ConfigStore::new(&path);
        store.write(DEFAULT_STORAGE_KEY, "en").expect("write succeeds");

        let config = config::load_from_path(&path).expect("reload");
        assert_eq!(config.engine.toggle_class, "switcher");
        assert_eq!(config.preferences.get(DEFAULT_STORAGE_KEY).map(String::as_str), Some("en"));
    }

    #[test]
    fn config_store_leaves_unparsable_file_untouched() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        let original = "[engine]\ntoggle_class = \"switcher\"\nbroken line\n\n[preferences]\nother = \"x\"\n";
        fs::write(&path, original).expect("write config");

        let mut store = ConfigStore::new(&path);
        assert!(store.write(DEFAULT_STORAGE_KEY, "ta").is_err());
        assert!(store.read(DEFAULT_STORAGE_KEY).is_err());

        let after = fs::read_to_string(&path).expect("reread config");
        assert_eq!(after, original);
    }

    #[test]
    fn config_store_unwritable_location_is_storage_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").expect("write blocker");

        let mut store = ConfigStore::new(blocker.join("settings.toml"));
        assert!(store.write(DEFAULT_STORAGE_KEY, "ta").is_err());
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.write("k", "v").expect("write succeeds");
        assert_eq!(store.read("k"), Ok(Some("v".to_string())));
        assert_eq!(store.get("k"), Some("v"));
    }

    #[test]
    fn unavailable_memory_store_fails_both_ways() {
        let mut store = MemoryStore::unavailable();
        assert!(store.read("k").is_err());
        assert!(store.write("k", "v").is_err());
        assert_eq!(store.get("k"), None);
    }
}
