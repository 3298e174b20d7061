// SPDX-License-Identifier: MPL-2.0
//! Translation table sources.
//!
//! - [`FileSource`]: reads a JSON table from disk (asynchronously, via tokio)
//! - [`BundledSource`]: serves the table embedded into the binary at build time
//! - [`StaticSource`]: hands out a table already in memory
//!
//! All of them expect `{ "<locale>": { "<key>": "<string>", ... }, ... }`.

use crate::application::port::TableSource;
use crate::config::Settings;
use crate::domain::{LocaleEntries, TranslationTable};
use crate::error::LoadError;
use futures_util::future::{self, BoxFuture, FutureExt};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/translations/"]
struct BundledTranslations;

const BUNDLED_FILE: &str = "translations.json";

/// Decodes a JSON translation table.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] unless the payload is an object of objects of
/// strings.
pub fn parse_table(bytes: &[u8]) -> Result<TranslationTable, LoadError> {
    let locales: HashMap<String, LocaleEntries> = serde_json::from_slice(bytes)?;
    Ok(TranslationTable::from(locales))
}

// =============================================================================
// FileSource
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured `table_path` resolved against `base_dir` (the page's
    /// directory). An absolute `table_path` is used as is.
    #[must_use]
    pub fn colocated(base_dir: &Path, settings: &Settings) -> Self {
        Self::new(base_dir.join(&settings.table_path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for FileSource {
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
        let path = self.path.clone();
        async move {
            let bytes = tokio::fs::read(&path).await.map_err(|error| {
                if error.kind() == ErrorKind::NotFound {
                    LoadError::NotFound(path.display().to_string())
                } else {
                    LoadError::from(error)
                }
            })?;
            parse_table(&bytes)
        }
        .boxed()
    }
}

// =============================================================================
// BundledSource
// =============================================================================

/// The table compiled in from `assets/translations/translations.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl TableSource for BundledSource {
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
        let result = BundledTranslations::get(BUNDLED_FILE)
            .ok_or_else(|| LoadError::NotFound(BUNDLED_FILE.to_string()))
            .and_then(|file| parse_table(file.data.as_ref()));
        future::ready(result).boxed()
    }
}

// =============================================================================
// StaticSource
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    table: TranslationTable,
}

impl StaticSource {
    #[must_use]
    pub fn new(table: TranslationTable) -> Self {
        Self { table }
    }
}

impl TableSource for StaticSource {
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
        future::ready(Ok(self.table.clone())).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TABLE_PATH;
    use crate::domain::{Locale, META_TITLE};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_table_reads_nested_mapping() {
        let table = parse_table(r#"{"en": {"greeting": "Hello"}, "ta": {"greeting": "வணக்கம்"}}"#.as_bytes())
            .expect("valid table");
        assert_eq!(table.lookup(Locale::Ta, "greeting"), Some("வணக்கம்"));
    }

    #[test]
    fn parse_table_rejects_non_string_values() {
        let result = parse_table(br#"{"en": {"count": 3}}"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn parse_table_rejects_truncated_json() {
        let result = parse_table(br#"{"en": {"greeting": "Hel"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn file_source_loads_colocated_table() {
        let dir = tempdir().expect("failed to create temp dir");
        let table_path = dir.path().join(DEFAULT_TABLE_PATH);
        fs::create_dir_all(table_path.parent().expect("has parent")).expect("mkdir");
        fs::write(&table_path, r#"{"en": {"meta.title": "Home"}}"#).expect("write table");

        let source = FileSource::colocated(dir.path(), &Settings::default());
        assert_eq!(source.path(), table_path.as_path());

        let table = source.load().await.expect("load should succeed");
        assert_eq!(table.lookup(Locale::En, META_TITLE), Some("Home"));
    }

    #[test]
    fn colocated_follows_configured_table_path() {
        let settings = Settings {
            table_path: "i18n/strings.json".to_string(),
            ..Settings::default()
        };
        let source = FileSource::colocated(Path::new("site"), &settings);
        assert_eq!(source.path(), Path::new("site/i18n/strings.json"));
    }

    #[tokio::test]
    async fn file_source_missing_file_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = FileSource::new(dir.path().join("absent.json"));

        let result = source.load().await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn bundled_source_has_both_locales() {
        let table = BundledSource.load().await.expect("bundled table parses");
        for locale in Locale::ALL {
            assert!(
                table.lookup(locale, META_TITLE).is_some(),
                "bundled table should translate the title for {locale}"
            );
        }
    }

    #[tokio::test]
    async fn static_source_returns_its_table() {
        let table = TranslationTable::new().with_entry(Locale::En, "greeting", "Hello");
        let loaded = StaticSource::new(table.clone()).load().await.expect("ready");
        assert_eq!(loaded, table);
    }
}
