// SPDX-License-Identifier: MPL-2.0
//! Declarative markers naming a translation key and what it replaces.

/// Where a marker's resolved string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTarget {
    /// The element's text content; existing child markup is destroyed.
    TextContent,
    /// The element's inner markup, written without sanitization.
    InnerMarkup,
    /// A named attribute on the element.
    Attribute(&'static str),
}

/// The kinds of marker attribute the engine recognizes.
///
/// Adding a kind means adding a variant here and listing it in [`Self::ALL`];
/// the application pass iterates that list in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `data-i18n`: plain text content.
    Text,
    /// `data-i18n-html`: trusted markup content.
    Markup,
    /// `data-i18n-alt`: the `alt` attribute.
    Alt,
    /// `data-i18n-aria`: the `aria-label` attribute.
    AriaLabel,
}

impl MarkerKind {
    /// Every kind, in the order the application pass handles them.
    pub const ALL: [MarkerKind; 4] = [
        MarkerKind::Text,
        MarkerKind::Markup,
        MarkerKind::Alt,
        MarkerKind::AriaLabel,
    ];

    /// Returns the attribute carrying the translation key.
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            MarkerKind::Text => "data-i18n",
            MarkerKind::Markup => "data-i18n-html",
            MarkerKind::Alt => "data-i18n-alt",
            MarkerKind::AriaLabel => "data-i18n-aria",
        }
    }

    #[must_use]
    pub fn target(self) -> MarkerTarget {
        match self {
            MarkerKind::Text => MarkerTarget::TextContent,
            MarkerKind::Markup => MarkerTarget::InnerMarkup,
            MarkerKind::Alt => MarkerTarget::Attribute("alt"),
            MarkerKind::AriaLabel => MarkerTarget::Attribute("aria-label"),
        }
    }
}
