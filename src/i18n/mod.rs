// SPDX-License-Identifier: MPL-2.0
//! Translation store.
//!
//! Holds the loaded [`TranslationTable`] and answers lookups by locale and key.
//! The table is replaced whole, never patched: a failed load leaves the
//! previous table (or none) visible, and lookups before any load answer
//! `None` for everything.

use crate::application::port::TableSource;
use crate::domain::{Locale, LocaleEntries, TranslationTable};
use crate::error::LoadError;

#[derive(Debug, Default)]
pub struct TranslationStore {
    table: Option<TranslationTable>,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a table from `source` and installs it.
    ///
    /// # Errors
    ///
    /// Returns the source's [`LoadError`]; the held table is left untouched.
    pub async fn load<S>(&mut self, source: &S) -> Result<&TranslationTable, LoadError>
    where
        S: TableSource + ?Sized,
    {
        let table = source.load().await?;
        Ok(self.replace(table))
    }

    /// Installs `table`, dropping any previous one.
    pub fn replace(&mut self, table: TranslationTable) -> &TranslationTable {
        self.table.insert(table)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    #[must_use]
    pub fn table(&self) -> Option<&TranslationTable> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn entries(&self, locale: Locale) -> Option<&LocaleEntries> {
        self.table.as_ref().and_then(|table| table.entries(locale))
    }

    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.table.as_ref().and_then(|table| table.lookup(locale, key))
    }
}
