// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests: a sample page, sample tables and
//! controllable table sources.

use crate::application::port::{DocumentAccess, ElementId, TableSource};
use crate::domain::{Locale, TranslationTable, META_DESCRIPTION, META_TITLE};
use crate::error::LoadError;
use crate::infrastructure::Document;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// The two-locale table used by the worked examples: `ta` has no title.
pub fn scenario_table() -> TranslationTable {
    TranslationTable::new()
        .with_entry(Locale::En, "greeting", "Hello")
        .with_entry(Locale::En, META_TITLE, "Home")
        .with_entry(Locale::Ta, "greeting", "வணக்கம்")
}

/// A table covering every marker kind on [`SamplePage`] in both locales.
pub fn full_table() -> TranslationTable {
    TranslationTable::new()
        .with_entry(Locale::En, "greeting", "Hello")
        .with_entry(Locale::En, "intro", "<strong>Hi</strong> there")
        .with_entry(Locale::En, "logo.alt", "Logo")
        .with_entry(Locale::En, "menu.open", "Open menu")
        .with_entry(Locale::En, META_TITLE, "Home")
        .with_entry(Locale::En, META_DESCRIPTION, "English description")
        .with_entry(Locale::Ta, "greeting", "வணக்கம்")
        .with_entry(Locale::Ta, "intro", "<strong>வணக்கம்</strong>")
        .with_entry(Locale::Ta, "logo.alt", "சின்னம்")
        .with_entry(Locale::Ta, "menu.open", "பட்டியலைத் திற")
        .with_entry(Locale::Ta, META_TITLE, "முகப்பு")
        .with_entry(Locale::Ta, META_DESCRIPTION, "தமிழ் விளக்கம்")
}

/// A small page with one element per marker kind, a toggle and an
/// untranslated paragraph.
pub struct SamplePage {
    pub document: Document,
    pub greeting: ElementId,
    pub intro: ElementId,
    pub logo: ElementId,
    pub menu: ElementId,
    pub untranslated: ElementId,
    pub description: ElementId,
    pub toggle: ElementId,
    pub en_label: ElementId,
    pub ta_label: ElementId,
}

impl SamplePage {
    pub fn new() -> Self {
        let mut document = Document::new();
        let root = document.root();
        document.set_attribute(root, "lang", "en");
        document.set_class_name(root, "i18n-loading");

        let head = document.append_element(root, "head");
        let title = document.append_element(head, "title");
        document.append_text(title, "Original");
        let description = document.append_element(head, "meta");
        document.set_attribute(description, "name", "description");
        document.set_attribute(description, "content", "original description");

        let body = document.append_element(root, "body");
        let greeting = marked(&mut document, body, "p", "data-i18n", "greeting");
        document.append_text(greeting, "Hi");
        let intro = marked(&mut document, body, "div", "data-i18n-html", "intro");
        let emphasis = document.append_element(intro, "em");
        document.append_text(emphasis, "old");
        let logo = marked(&mut document, body, "img", "data-i18n-alt", "logo.alt");
        document.set_attribute(logo, "alt", "old logo");
        let menu = marked(&mut document, body, "a", "data-i18n-aria", "menu.open");
        document.set_attribute(menu, "aria-label", "old menu");
        let untranslated = marked(&mut document, body, "p", "data-i18n", "not.in.table");
        document.append_text(untranslated, "Keep me");

        let toggle = document.append_element(body, "button");
        document.set_class_name(toggle, "lang-toggle");
        let en_label = document.append_element(toggle, "span");
        document.set_class_name(en_label, "lang-en");
        document.append_text(en_label, "EN");
        let ta_label = document.append_element(toggle, "span");
        document.set_class_name(ta_label, "lang-ta");
        document.append_text(ta_label, "த");

        Self {
            document,
            greeting,
            intro,
            logo,
            menu,
            untranslated,
            description,
            toggle,
            en_label,
            ta_label,
        }
    }
}

fn marked(
    document: &mut Document,
    parent: ElementId,
    tag: &str,
    marker: &str,
    key: &str,
) -> ElementId {
    let element = document.append_element(parent, tag);
    document.set_attribute(element, marker, key);
    element
}

// =============================================================================
// Sources
// =============================================================================

/// Resolves immediately with a fixed result.
pub struct ReadySource(pub Result<TranslationTable, LoadError>);

impl TableSource for ReadySource {
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
        future::ready(self.0.clone()).boxed()
    }
}

/// Resolves only when the test sends a result through the paired sender.
pub struct GatedSource {
    gate: Mutex<Option<oneshot::Receiver<Result<TranslationTable, LoadError>>>>,
}

impl GatedSource {
    pub fn new() -> (Self, oneshot::Sender<Result<TranslationTable, LoadError>>) {
        let (sender, receiver) = oneshot::channel();
        let source = Self {
            gate: Mutex::new(Some(receiver)),
        };
        (source, sender)
    }
}

impl TableSource for GatedSource {
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
        let gate = self.gate.lock().ok().and_then(|mut gate| gate.take());
        async move {
            match gate {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(LoadError::Io("gate dropped".to_string()))),
                None => Err(LoadError::Io("gate already used".to_string())),
            }
        }
        .boxed()
    }
}

/// Never resolves.
pub struct PendingSource;

impl TableSource for PendingSource {
    fn load(&self) -> BoxFuture<'static, Result<TranslationTable, LoadError>> {
        future::pending().boxed()
    }
}
