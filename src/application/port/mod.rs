// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The engine depends only on these capabilities, never on a concrete
//! document, storage or network layer, so it runs against in-memory fakes in
//! tests exactly as it does against real adapters.
//!
//! # Available Ports
//!
//! - [`document`]: Element queries and mutations ([`DocumentAccess`])
//! - [`preference`]: Origin-scoped persisted preferences ([`PreferenceStore`])
//! - [`source`]: Translation table fetching ([`TableSource`])
//!
//! # Design Notes
//!
//! - Traits use domain types only
//! - Storage methods return `Result` with [`StorageError`](crate::error::StorageError);
//!   the engine decides to swallow them
//! - Only [`TableSource`] is asynchronous; everything else runs to completion

pub mod document;
pub mod preference;
pub mod source;

pub use document::{DocumentAccess, ElementId, Listener};
pub use preference::PreferenceStore;
pub use source::TableSource;
