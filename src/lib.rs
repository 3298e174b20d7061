// SPDX-License-Identifier: MPL-2.0
//! `nalam_i18n` applies English/Tamil translations to marked-up documents.
//!
//! Elements opt in with `data-i18n*` attributes whose values are keys into a
//! JSON translation table. The [`app::Engine`] loads the table, restores the
//! reader's persisted choice, rewrites the document and keeps toggle controls
//! in sync. Documents, preference storage and table sources are injected
//! through the traits in [`application::port`]; [`infrastructure`] provides
//! an in-memory XHTML document, file and bundled sources, and a
//! `settings.toml`-backed preference store.

#![doc(html_root_url = "https://docs.rs/nalam_i18n/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;
