// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`dom`]: In-memory document tree (implements [`DocumentAccess`])
//! - [`markup`]: XHTML reader/writer for [`dom::Document`]
//! - [`source`]: File, bundled and static table sources (implement [`TableSource`])
//! - [`preferences`]: `settings.toml` and in-memory stores (implement [`PreferenceStore`])
//!
//! [`DocumentAccess`]: crate::application::port::DocumentAccess
//! [`TableSource`]: crate::application::port::TableSource
//! [`PreferenceStore`]: crate::application::port::PreferenceStore

pub mod dom;
pub mod markup;
pub mod preferences;
pub mod source;

// Re-export main types for convenience
pub use dom::Document;
pub use preferences::{ConfigStore, MemoryStore};
pub use source::{BundledSource, FileSource, StaticSource};
