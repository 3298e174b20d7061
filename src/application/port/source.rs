// SPDX-License-Identifier: MPL-2.0
//! Translation table source port definition.

use crate::domain::TranslationTable;
use crate::error::LoadError;
use futures_util::future::BoxFuture;

/// Port for fetching the translation table.
///
/// The returned future owns everything it needs (`'static`), so the engine can
/// hold it across its event loop while toggles are processed.
///
/// # Example
///
/// ```ignore
/// use nalam_i18n::application::port::TableSource;
/// use nalam_i18n::domain::TranslationTable;
/// use nalam_i18n::error::LoadError;
/// use futures_util::future::{self, BoxFuture, FutureExt};
///
/// struct Empty;
///
/// impl TableSource for Empty {
///     fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
///         future::ready(Ok(TranslationTable::new())).boxed()
///     }
/// }
/// ```
pub trait TableSource: Send + Sync {
    /// Starts fetching and parsing the table.
    ///
    /// The future resolves to a [`LoadError`] if the fetch or parse fails.
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>>;
}
