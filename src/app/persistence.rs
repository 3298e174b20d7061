// SPDX-License-Identifier: MPL-2.0
//! Persisted locale preference.
//!
//! Storage failures never reach the caller: a failed read means "no
//! preference" and a failed write leaves only the in-memory session.

use crate::application::port::PreferenceStore;
use crate::domain::Locale;

/// Reads the persisted locale, rejecting anything outside the supported set.
pub fn restore_locale<P>(store: &P, key: &str) -> Option<Locale>
where
    P: PreferenceStore + ?Sized,
{
    match store.read(key) {
        Ok(Some(value)) => match value.parse() {
            Ok(locale) => Some(locale),
            Err(error) => {
                tracing::debug!(%error, "ignoring persisted locale");
                None
            }
        },
        Ok(None) => None,
        Err(error) => {
            tracing::debug!(%error, "failed to read locale preference");
            None
        }
    }
}

/// Persists `locale` under `key`.
pub fn record_locale<P>(store: &mut P, key: &str, locale: Locale)
where
    P: PreferenceStore + ?Sized,
{
    if let Err(error) = store.write(key, locale.code()) {
        tracing::debug!(%error, %locale, "failed to save locale preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    const KEY: &str = "nalam-lang";

    #[test]
    fn restores_valid_preference() {
        let store = MemoryStore::new().with_value(KEY, "ta");
        assert_eq!(restore_locale(&store, KEY), Some(Locale::Ta));
    }

    #[test]
    fn invalid_preference_is_ignored() {
        let store = MemoryStore::new().with_value(KEY, "fr");
        assert_eq!(restore_locale(&store, KEY), None);
    }

    #[test]
    fn missing_preference_is_none() {
        assert_eq!(restore_locale(&MemoryStore::new(), KEY), None);
    }

    #[test]
    fn unavailable_storage_is_swallowed() {
        let mut store = MemoryStore::unavailable();
        record_locale(&mut store, KEY, Locale::Ta);
        assert_eq!(restore_locale(&store, KEY), None);
    }

    #[test]
    fn record_writes_locale_code() {
        let mut store = MemoryStore::new();
        record_locale(&mut store, KEY, Locale::Ta);
        assert_eq!(store.get(KEY), Some("ta"));
    }
}
