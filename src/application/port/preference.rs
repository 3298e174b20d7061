// SPDX-License-Identifier: MPL-2.0
//! Persisted preference port definition.
//!
//! A [`PreferenceStore`] is origin-scoped storage that survives across page
//! loads. The engine treats every failure as "no preference" and carries on
//! with in-memory state only.

use crate::error::StorageError;

/// Port for reading and writing persisted string preferences.
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the storage cannot be read at all.
    /// A missing key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the storage cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
