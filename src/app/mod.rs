// SPDX-License-Identifier: MPL-2.0
//! Application engine.
//!
//! [`Engine`] ties a document, a preference store and the translation store
//! together. Its lifecycle is:
//!
//! 1. [`Engine::new`] with injected adapters and [`Settings`]
//! 2. [`Engine::initialize`] restores the persisted locale, binds the toggle
//!    controls and starts the table load
//! 3. [`Engine::run_until_loaded`] drives queued messages and the pending load
//!    until the load resolves, then runs the initial pass
//! 4. [`Engine::pump`] handles messages posted afterwards (toggle activations,
//!    [`Handle`] calls)
//! 5. [`Engine::into_parts`] hands the adapters back
//!
//! Every state change goes through [`Engine::update`].

pub mod message;
pub mod paths;
pub mod persistence;
pub mod session;
pub mod update;

pub use message::{Handle, Message};
pub use session::Session;
pub use update::PassReport;

use crate::application::port::{DocumentAccess, PreferenceStore, TableSource};
use crate::config::Settings;
use crate::domain::{Locale, TranslationTable};
use crate::error::LoadError;
use crate::i18n::TranslationStore;
use futures_util::future::{BoxFuture, FutureExt};
use std::fmt;
use tokio::sync::mpsc;

/// Where the table load stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// `initialize` has not run yet.
    #[default]
    Idle,
    Pending,
    Loaded,
    /// The load failed or timed out. There is no retry.
    Failed,
}

type PendingLoad = BoxFuture<'static, Result<TranslationTable, LoadError>>;

pub struct Engine<D, P> {
    document: D,
    preferences: P,
    settings: Settings,
    store: TranslationStore,
    session: Session,
    phase: LoadPhase,
    pending: Option<PendingLoad>,
    sender: mpsc::UnboundedSender<Message>,
    inbox: mpsc::UnboundedReceiver<Message>,
}

impl<D: fmt::Debug, P: fmt::Debug> fmt::Debug for Engine<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("document", &self.document)
            .field("preferences", &self.preferences)
            .field("settings", &self.settings)
            .field("store", &self.store)
            .field("session", &self.session)
            .field("phase", &self.phase)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl<D, P> Engine<D, P>
where
    D: DocumentAccess,
    P: PreferenceStore,
{
    pub fn new(document: D, preferences: P, settings: Settings) -> Self {
        let (sender, inbox) = mpsc::unbounded_channel();
        Self {
            document,
            preferences,
            settings,
            store: TranslationStore::new(),
            session: Session::default(),
            phase: LoadPhase::Idle,
            pending: None,
            sender,
            inbox,
        }
    }

    /// Restores the persisted locale, binds the toggle controls and starts
    /// loading the table from `source`.
    ///
    /// Nothing is applied until the load resolves inside
    /// [`Self::run_until_loaded`]. A second call is ignored.
    pub fn initialize<S>(&mut self, source: &S)
    where
        S: TableSource + ?Sized,
    {
        if self.phase != LoadPhase::Idle {
            tracing::warn!(phase = ?self.phase, "engine already initialized, ignoring");
            return;
        }

        let initial =
            persistence::restore_locale(&self.preferences, &self.settings.storage_key)
                .unwrap_or_default();
        self.session = Session::new(initial);

        let toggles = self.bind_toggles();
        tracing::debug!(locale = %initial, toggles, "engine initialized");

        let load = source.load();
        self.pending = Some(match self.settings.load_timeout() {
            Some(limit) => async move {
                tokio::time::timeout(limit, load)
                    .await
                    .unwrap_or(Err(LoadError::TimedOut(limit)))
            }
            .boxed(),
            None => load,
        });
        self.phase = LoadPhase::Pending;
    }

    fn bind_toggles(&mut self) -> usize {
        let toggles = self.document.elements_with_class(&self.settings.toggle_class);
        for &toggle in &toggles {
            let handle = self.handle();
            self.document.on_activate(
                toggle,
                Box::new(move || {
                    handle.toggle();
                }),
            );
        }
        toggles.len()
    }

    /// Runs the application pass for `locale`.
    ///
    /// Returns `false`, changing nothing, when no table is loaded or the
    /// table has no entries for `locale`. On success the locale becomes
    /// active and is persisted.
    pub fn apply_locale(&mut self, locale: Locale) -> bool {
        if !self.store.is_loaded() {
            tracing::debug!(%locale, "no table loaded yet, pass skipped");
            return false;
        }
        let Some(entries) = self.store.entries(locale) else {
            tracing::debug!(%locale, "table has no entries for locale, pass skipped");
            return false;
        };

        let report = update::apply_pass(&mut self.document, entries, locale, &self.settings);
        tracing::debug!(?report, "pass applied");

        self.session.realize(locale);
        persistence::record_locale(&mut self.preferences, &self.settings.storage_key, locale);
        true
    }

    /// Switches to the locale after the active one.
    pub fn toggle(&mut self) -> bool {
        self.set_locale(self.session.active().next())
    }

    /// Switches to the locale named by `code`.
    ///
    /// Unsupported codes are ignored.
    pub fn set_language(&mut self, code: &str) -> bool {
        match code.parse::<Locale>() {
            Ok(locale) => self.set_locale(locale),
            Err(error) => {
                tracing::debug!(%error, "ignoring language request");
                false
            }
        }
    }

    /// Records `locale` as requested, persists it, then runs the pass.
    ///
    /// The preference is written even when the pass is skipped, so a request
    /// made before the table arrives takes effect once it does.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        self.session.request(locale);
        persistence::record_locale(&mut self.preferences, &self.settings.storage_key, locale);
        self.apply_locale(locale)
    }

    /// The locale of the last successful pass, or the initial one.
    #[must_use]
    pub fn language(&self) -> Locale {
        self.session.active()
    }

    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::new(self.sender.clone())
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle => {
                self.toggle();
            }
            Message::SetLanguage(code) => {
                self.set_language(&code);
            }
            Message::TableLoaded(result) => self.finish_load(result),
        }
    }

    fn finish_load(&mut self, result: Result<TranslationTable, LoadError>) {
        self.pending = None;
        match result {
            Ok(table) => {
                let locales = self.store.replace(table).locale_count();
                tracing::info!(locales, "translation table installed");
                self.phase = LoadPhase::Loaded;

                let locale =
                    persistence::restore_locale(&self.preferences, &self.settings.storage_key)
                        .unwrap_or(self.session.requested());
                if !self.apply_locale(locale) {
                    self.clear_loading();
                }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load translations");
                self.phase = LoadPhase::Failed;
                self.clear_loading();
            }
        }
    }

    fn clear_loading(&mut self) {
        let root = self.document.root();
        self.document.remove_class(root, &self.settings.loading_class);
    }

    /// Handles every queued message. Returns how many there were.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.inbox.try_recv() {
            self.update(message);
            handled += 1;
        }
        handled
    }

    /// Drives the engine until the pending load resolves.
    ///
    /// Queued messages win over a ready load, so requests made before the
    /// table arrived are recorded before the initial pass reads them.
    /// Returns immediately when no load is pending.
    pub async fn run_until_loaded(&mut self) -> LoadPhase {
        while let Some(pending) = self.pending.as_mut() {
            let message = tokio::select! {
                biased;
                Some(message) = self.inbox.recv() => message,
                result = pending => Message::TableLoaded(result),
            };
            self.update(message);
        }
        self.phase
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Tears the engine down, dropping any pending load.
    pub fn into_parts(self) -> (D, P) {
        (self.document, self.preferences)
    }
}
