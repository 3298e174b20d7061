// SPDX-License-Identifier: MPL-2.0
//! Translation table types.
//!
//! A table maps a locale code to that locale's entries, and each entry maps a
//! translation key to its translated string. Absence at either level is not an
//! error; callers treat it as "leave the current content alone".

use super::Locale;
use std::collections::HashMap;

/// Key whose value replaces the document title.
pub const META_TITLE: &str = "meta.title";

/// Key whose value replaces the description metadata.
pub const META_DESCRIPTION: &str = "meta.description";

/// All translated strings for one locale, keyed by translation key.
pub type LocaleEntries = HashMap<String, String>;

/// The full locale -> key -> string mapping.
///
/// Locale codes outside the supported set are kept as loaded but can never be
/// looked up, since lookups go through [`Locale`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    locales: HashMap<String, LocaleEntries>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries for `locale`, if the table has any.
    #[must_use]
    pub fn entries(&self, locale: Locale) -> Option<&LocaleEntries> {
        self.locales.get(locale.code())
    }

    /// Returns the translated string for `key` under `locale`.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries(locale)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Inserts (or overwrites) a single entry under a raw locale code.
    pub fn insert(
        &mut self,
        locale_code: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.locales
            .entry(locale_code.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Builder form of [`Self::insert`] for a supported locale.
    #[must_use]
    pub fn with_entry(mut self, locale: Locale, key: &str, value: &str) -> Self {
        self.insert(locale.code(), key, value);
        self
    }

    /// Returns the number of locale codes present, supported or not.
    #[must_use]
    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl From<HashMap<String, LocaleEntries>> for TranslationTable {
    fn from(locales: HashMap<String, LocaleEntries>) -> Self {
        Self { locales }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTable {
        TranslationTable::new()
            .with_entry(Locale::En, "greeting", "Hello")
            .with_entry(Locale::En, META_TITLE, "Home")
            .with_entry(Locale::Ta, "greeting", "வணக்கம்")
    }

    #[test]
    fn lookup_finds_existing_entry() {
        let table = sample();
        assert_eq!(table.lookup(Locale::En, "greeting"), Some("Hello"));
        assert_eq!(table.lookup(Locale::Ta, "greeting"), Some("வணக்கம்"));
    }

    #[test]
    fn lookup_missing_key_is_absent() {
        let table = sample();
        assert_eq!(table.lookup(Locale::Ta, META_TITLE), None);
    }

    #[test]
    fn lookup_missing_locale_is_absent() {
        let table = TranslationTable::new().with_entry(Locale::En, "greeting", "Hello");
        assert!(table.entries(Locale::Ta).is_none());
        assert_eq!(table.lookup(Locale::Ta, "greeting"), None);
    }

    #[test]
    fn unsupported_locale_codes_are_kept_but_unreachable() {
        let mut table = sample();
        table.insert("fr", "greeting", "Bonjour");
        assert_eq!(table.locale_count(), 3);
        assert_eq!(table.lookup(Locale::En, "greeting"), Some("Hello"));
    }

    #[test]
    fn from_map_preserves_entries() {
        let mut en = LocaleEntries::new();
        en.insert("nav.home".into(), "Home".into());
        let table = TranslationTable::from(HashMap::from([("en".to_string(), en)]));
        assert_eq!(table.lookup(Locale::En, "nav.home"), Some("Home"));
        assert!(!table.is_empty());
    }
}
