// SPDX-License-Identifier: MPL-2.0
//! The application pass: writes one locale's entries into a document.
//!
//! The pass is a plain function over [`DocumentAccess`] so it can run against
//! any document adapter. Session and preference bookkeeping stay in
//! [`Engine`](super::Engine).

use crate::application::port::DocumentAccess;
use crate::config::Settings;
use crate::domain::{Locale, LocaleEntries, MarkerKind, MarkerTarget, META_DESCRIPTION, META_TITLE};

/// What a single pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    pub locale: Locale,
    /// Elements whose text content was replaced.
    pub text: usize,
    /// Elements whose inner markup was replaced.
    pub markup: usize,
    pub alt: usize,
    pub aria_label: usize,
    pub title: bool,
    pub description: bool,
    /// Toggle controls refreshed.
    pub toggles: usize,
}

impl PassReport {
    fn count_mut(&mut self, kind: MarkerKind) -> &mut usize {
        match kind {
            MarkerKind::Text => &mut self.text,
            MarkerKind::Markup => &mut self.markup,
            MarkerKind::Alt => &mut self.alt,
            MarkerKind::AriaLabel => &mut self.aria_label,
        }
    }

    /// Number of marked elements the pass wrote to.
    #[must_use]
    pub fn marked(&self) -> usize {
        self.text + self.markup + self.alt + self.aria_label
    }
}

/// Applies `entries` to `document` as `locale`.
///
/// Marker kinds run in [`MarkerKind::ALL`] order, each against a fresh query,
/// followed by the reserved keys, the root `lang`, the toggles and finally
/// removal of the loading class. Keys missing from `entries` leave their
/// elements untouched.
pub fn apply_pass<D: DocumentAccess + ?Sized>(
    document: &mut D,
    entries: &LocaleEntries,
    locale: Locale,
    settings: &Settings,
) -> PassReport {
    let mut report = PassReport {
        locale,
        ..PassReport::default()
    };

    for kind in MarkerKind::ALL {
        let marker = kind.attribute();
        for element in document.marked_elements(marker) {
            let Some(key) = document.attribute(element, marker) else {
                continue;
            };
            let Some(value) = entries.get(&key) else {
                continue;
            };
            match kind.target() {
                MarkerTarget::TextContent => document.set_text_content(element, value),
                MarkerTarget::InnerMarkup => document.set_inner_markup(element, value),
                MarkerTarget::Attribute(name) => document.set_attribute(element, name, value),
            }
            *report.count_mut(kind) += 1;
        }
    }

    if let Some(title) = non_empty(entries, META_TITLE) {
        document.set_title(title);
        report.title = true;
    }

    if let Some(description) = non_empty(entries, META_DESCRIPTION) {
        if let Some(meta) = document.meta_element(&settings.description_meta) {
            document.set_attribute(meta, "content", description);
            report.description = true;
        }
    }

    let root = document.root();
    document.set_attribute(root, "lang", locale.code());

    report.toggles = refresh_toggles(document, locale, settings);

    document.remove_class(root, &settings.loading_class);

    report
}

/// Marks `active` as the current locale on every toggle control.
///
/// Returns the number of toggles refreshed.
pub fn refresh_toggles<D: DocumentAccess + ?Sized>(
    document: &mut D,
    active: Locale,
    settings: &Settings,
) -> usize {
    let toggles = document.elements_with_class(&settings.toggle_class);
    for &toggle in &toggles {
        for locale in Locale::ALL {
            let label_class = locale.label_class();
            let Some(label) = document.first_descendant_with_class(toggle, &label_class) else {
                continue;
            };
            let state = if locale == active {
                &settings.active_class
            } else {
                &settings.inactive_class
            };
            document.set_class_name(label, &format!("{label_class} {state}"));
        }
        document.set_attribute(toggle, "aria-label", active.next().switch_prompt());
    }
    toggles.len()
}

fn non_empty<'a>(entries: &'a LocaleEntries, key: &str) -> Option<&'a str> {
    entries
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
