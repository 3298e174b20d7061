// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core translation types, free of I/O and of any engine state.
//!
//! # Modules
//!
//! - [`locale`]: The closed set of supported locales ([`Locale`])
//! - [`marker`]: Marker attributes and their mutation targets ([`MarkerKind`])
//! - [`table`]: The loaded translation table ([`TranslationTable`]) and reserved keys

pub mod locale;
pub mod marker;
pub mod table;

pub use locale::Locale;
pub use marker::{MarkerKind, MarkerTarget};
pub use table::{LocaleEntries, TranslationTable, META_DESCRIPTION, META_TITLE};
