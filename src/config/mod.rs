// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine's configuration, including loading and saving
//! settings and persisted preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[engine]` - Storage key, resource path, load timeout and presentation classes
//! - `[preferences]` - Persisted string preferences (the chosen locale)
//!
//! # Examples
//!
//! ```no_run
//! use nalam_i18n::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Persist a locale choice
//! config.preferences.insert("nalam-lang".to_string(), "ta".to_string());
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.preferences.get("nalam-lang").map(String::as_str), Some("ta"));
//! std::fs::remove_dir_all("./temp_config_dir").unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Settings
// =============================================================================

/// Engine settings, the `[engine]` section of `settings.toml`.
///
/// Missing fields take their values from [`defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage_key: String,
    pub table_path: String,
    /// No timeout when absent: a load that never resolves leaves the page
    /// untranslated and still marked as loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_timeout_secs: Option<u64>,
    pub loading_class: String,
    pub toggle_class: String,
    pub active_class: String,
    pub inactive_class: String,
    pub description_meta: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            table_path: DEFAULT_TABLE_PATH.to_string(),
            load_timeout_secs: None,
            loading_class: DEFAULT_LOADING_CLASS.to_string(),
            toggle_class: DEFAULT_TOGGLE_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            inactive_class: DEFAULT_INACTIVE_CLASS.to_string(),
            description_meta: DEFAULT_DESCRIPTION_META.to_string(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_secs.map(Duration::from_secs)
    }
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: Settings,
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
}

pub fn load() -> Result<Config> {
    load_with_override(None)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Loads from `settings.toml` in `config_dir`, or the default directory.
pub fn load_with_override(config_dir: Option<&Path>) -> Result<Config> {
    if let Some(path) = paths::get_config_file_with_override(config_dir.map(Path::to_path_buf)) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save_with_override(config: &Config, config_dir: Option<&Path>) -> Result<()> {
    if let Some(path) = paths::get_config_file_with_override(config_dir.map(Path::to_path_buf)) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file; unparsable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|error| {
        tracing::warn!(path = %path.display(), %error, "invalid settings file, using defaults");
        Config::default()
    }))
}

/// Reads a config file, failing with [`crate::error::Error::Config`] on
/// unparsable content instead of substituting the defaults.
pub fn load_from_path_strict(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let mut config = Config::default();
        config
            .preferences
            .insert(DEFAULT_STORAGE_KEY.to_string(), "ta".to_string());
        config.engine.load_timeout_secs = Some(5);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.preferences.is_empty());
        assert_eq!(loaded.engine, Settings::default());
    }

    #[test]
    fn strict_load_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path_strict(&config_path);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn partial_engine_section_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[engine]\ntoggle_class = \"switcher\"\nload_timeout_secs = 3\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.engine.toggle_class, "switcher");
        assert_eq!(loaded.engine.load_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(loaded.engine.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_override_missing_file_is_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_with_override(Some(temp_dir.path())).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn default_settings_have_no_timeout() {
        assert_eq!(Settings::default().load_timeout(), None);
    }
}
