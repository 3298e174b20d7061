// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for engine settings.
//!
//! # Categories
//!
//! - **Storage**: Preference key and translation resource path
//! - **Presentation**: Classes the engine adds to or removes from the document
//! - **Metadata**: Name of the description `<meta>` element

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Key under which the chosen locale is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "nalam-lang";

/// Translation table location, relative to the page's base directory.
pub const DEFAULT_TABLE_PATH: &str = "translations/translations.json";

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Class on the document root hiding content until the first pass.
pub const DEFAULT_LOADING_CLASS: &str = "i18n-loading";

/// Class identifying toggle controls.
pub const DEFAULT_TOGGLE_CLASS: &str = "lang-toggle";

/// Classes appended to the active locale's label.
pub const DEFAULT_ACTIVE_CLASS: &str = "font-bold text-emerald-600";

/// Classes appended to every other locale's label.
pub const DEFAULT_INACTIVE_CLASS: &str = "text-slate-400";

// ==========================================================================
// Metadata Defaults
// ==========================================================================

/// `name` of the `<meta>` element receiving `meta.description`.
pub const DEFAULT_DESCRIPTION_META: &str = "description";
