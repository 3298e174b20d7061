// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by [`Engine::update`](super::Engine::update) and the
//! [`Handle`] used to post them from outside the engine.

use crate::domain::TranslationTable;
use crate::error::LoadError;
use tokio::sync::mpsc;

/// Everything that can happen to the engine after startup.
#[derive(Debug)]
pub enum Message {
    /// A toggle control was activated.
    Toggle,
    /// An external caller asked for a locale by code; unsupported codes are ignored.
    SetLanguage(String),
    /// The table load resolved.
    TableLoaded(Result<TranslationTable, LoadError>),
}

/// Cloneable sender posting [`Message`]s into an engine's inbox.
///
/// Posted messages are handled the next time the engine pumps its inbox or
/// runs its event loop, in the order they were posted.
#[derive(Debug, Clone)]
pub struct Handle {
    sender: mpsc::UnboundedSender<Message>,
}

impl Handle {
    pub(crate) fn new(sender: mpsc::UnboundedSender<Message>) -> Self {
        Self { sender }
    }

    /// Requests a switch to the next locale. Returns `false` if the engine is gone.
    pub fn toggle(&self) -> bool {
        self.post(Message::Toggle)
    }

    /// Requests a switch to `code`. Returns `false` if the engine is gone.
    pub fn set_language(&self, code: impl Into<String>) -> bool {
        self.post(Message::SetLanguage(code.into()))
    }

    fn post(&self, message: Message) -> bool {
        self.sender.send(message).is_ok()
    }
}
