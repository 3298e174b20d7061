// SPDX-License-Identifier: MPL-2.0
//! In-memory language selection state.

use crate::domain::Locale;

/// The active locale plus the most recent request.
///
/// `active` only moves when a pass actually rendered a locale; `requested`
/// moves on every switch request and mirrors what was (or would have been)
/// persisted, so a request made while storage is unavailable still wins when
/// the table arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    active: Locale,
    requested: Locale,
}

impl Session {
    #[must_use]
    pub fn new(initial: Locale) -> Self {
        Self {
            active: initial,
            requested: initial,
        }
    }

    #[must_use]
    pub fn active(&self) -> Locale {
        self.active
    }

    #[must_use]
    pub fn requested(&self) -> Locale {
        self.requested
    }

    pub(crate) fn request(&mut self, locale: Locale) {
        self.requested = locale;
    }

    pub(crate) fn realize(&mut self, locale: Locale) {
        self.active = locale;
        self.requested = locale;
    }
}
