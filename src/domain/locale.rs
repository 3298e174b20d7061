// SPDX-License-Identifier: MPL-2.0
//! The fixed set of supported locales.

use crate::error::InvalidLocale;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Locale
// =============================================================================

/// A locale the engine can render content in.
///
/// The set is closed: values outside it cannot be constructed, so every
/// locale flowing through the engine is supported by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English, the default locale.
    #[default]
    En,
    /// Tamil.
    Ta,
}

impl Locale {
    /// Every supported locale, in cyclic switching order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ta];

    /// The locale used when no valid preference exists (the first of [`Self::ALL`]).
    pub const DEFAULT: Locale = Locale::ALL[0];

    /// Returns the code used in translation tables and the `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ta => "ta",
        }
    }

    /// Returns the locale after this one in the fixed cyclic order.
    #[must_use]
    pub fn next(self) -> Locale {
        let position = Self::ALL
            .iter()
            .position(|locale| *locale == self)
            .unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    /// Returns the prompt for switching *to* this locale, written in this
    /// locale's own language.
    #[must_use]
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Locale::En => "Switch to English",
            Locale::Ta => "தமிழுக்கு மாற்று",
        }
    }

    /// Returns the class marking this locale's label inside a toggle control.
    #[must_use]
    pub fn label_class(self) -> String {
        format!("lang-{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| InvalidLocale(code.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
