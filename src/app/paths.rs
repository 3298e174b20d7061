// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - the `override_path` argument (CLI `--config-dir`, tests)
//! 2. **Environment variable** - `NALAM_I18N_CONFIG_DIR`, if set and non-empty
//! 3. **Platform default** - `dirs::config_dir()` with the app name appended
//!
//! There is no process-wide override: callers that want one pass it down.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "NalamI18n";

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "NALAM_I18N_CONFIG_DIR";

/// Returns the config directory, or `None` if the platform has none.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the full path of `settings.toml` under the resolved config directory.
pub fn get_config_file_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_app_config_dir_with_override(override_dir).map(|dir| dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn config_file_lives_in_config_dir() {
        let dir = PathBuf::from("/custom/config");
        let file = get_config_file_with_override(Some(dir.clone()));
        assert_eq!(file, Some(dir.join(CONFIG_FILE)));
    }
}
