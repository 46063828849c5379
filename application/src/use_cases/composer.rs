//! Composer use case
//!
//! Owns the pending input text of a widget. A successful [`Composer::send`]
//! appends exactly one user message and spawns exactly one reply task; the
//! task appends the bot message when the reply provider finishes. Sends are
//! fire-and-forget: nothing here waits for replies, and several may be in
//! flight at once.
//!
//! Reply tasks are tied to the composer's lifetime through a
//! [`CancellationToken`]. After [`Composer::teardown`] (or drop) a reply
//! that has not landed yet is discarded instead of written to the store.
//! The token is checked and cancelled under the writer's gate, so no reply
//! can slip in between the check and the append.

use super::writer::ConversationWriter;
use crate::reply::ReplyProvider;
use chatbot_domain::{ExchangePhase, ExchangeState, Message};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Keyboard input understood by the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerKey {
    /// Submit the pending text
    Enter,
    /// Append a character to the pending text
    Char(char),
    /// Remove the last character of the pending text
    Backspace,
}

/// Handle to the reply task spawned by a successful send.
///
/// Dropping it detaches the task; the reply still lands.
#[derive(Debug)]
pub struct PendingReply {
    user_message: Message,
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// The user message appended by the send
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }

    /// Whether the reply task has finished
    pub fn is_settled(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the reply has been appended (or discarded).
    pub async fn settled(self) {
        if let Err(e) = self.handle.await {
            debug!("Reply task ended abnormally: {}", e);
        }
    }
}

/// Pending input plus the send path of one widget
pub struct Composer {
    pending: String,
    writer: Arc<ConversationWriter>,
    provider: Arc<dyn ReplyProvider>,
    exchange: Arc<Mutex<ExchangeState>>,
    liveness: CancellationToken,
}

impl Composer {
    pub fn new(writer: Arc<ConversationWriter>, provider: Arc<dyn ReplyProvider>) -> Self {
        Self {
            pending: String::new(),
            writer,
            provider,
            exchange: Arc::new(Mutex::new(ExchangeState::new())),
            liveness: CancellationToken::new(),
        }
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn writer(&self) -> &Arc<ConversationWriter> {
        &self.writer
    }

    pub fn provider(&self) -> &Arc<dyn ReplyProvider> {
        &self.provider
    }

    pub fn phase(&self) -> ExchangePhase {
        self.writer
            .with_gate(|| lock_exchange(&self.exchange).phase())
    }

    pub fn is_torn_down(&self) -> bool {
        self.liveness.is_cancelled()
    }

    /// Replace the pending text verbatim.
    pub fn on_text_change(&mut self, value: impl Into<String>) {
        self.pending = value.into();
        lock_exchange(&self.exchange).text_changed();
    }

    /// Handle one key press. Enter takes the same path as [`Composer::send`].
    pub fn on_key(&mut self, key: ComposerKey) -> Option<PendingReply> {
        match key {
            ComposerKey::Enter => self.send(),
            ComposerKey::Char(c) => {
                let mut value = self.pending.clone();
                value.push(c);
                self.on_text_change(value);
                None
            }
            ComposerKey::Backspace => {
                let mut value = self.pending.clone();
                value.pop();
                self.on_text_change(value);
                None
            }
        }
    }

    /// Send the pending text.
    ///
    /// Returns `None` without touching the store when the text is blank
    /// after trimming, or when the composer has been torn down. Must be
    /// called from within a tokio runtime.
    pub fn send(&mut self) -> Option<PendingReply> {
        if self.is_torn_down() || self.pending.trim().is_empty() {
            return None;
        }

        let user_message = self.writer.post_user(&self.pending).ok()?;
        self.pending.clear();
        lock_exchange(&self.exchange).sent();

        let handle = tokio::spawn(deliver_reply(
            self.provider.clone(),
            self.writer.clone(),
            self.exchange.clone(),
            self.liveness.clone(),
            user_message.text().to_string(),
        ));

        Some(PendingReply {
            user_message,
            handle,
        })
    }

    /// Explicit clear-all of the conversation.
    pub fn clear_conversation(&self) {
        self.writer.clear();
    }

    /// Mark the owning component as gone; in-flight replies are dropped.
    pub fn teardown(&self) {
        if !self.liveness.is_cancelled() {
            info!("Composer torn down");
            self.writer.cancel(&self.liveness);
        }
    }
}

impl Drop for Composer {
    fn drop(&mut self) {
        self.writer.cancel(&self.liveness);
    }
}

async fn deliver_reply(
    provider: Arc<dyn ReplyProvider>,
    writer: Arc<ConversationWriter>,
    exchange: Arc<Mutex<ExchangeState>>,
    liveness: CancellationToken,
    sent: String,
) {
    let reply = tokio::select! {
        biased;
        _ = liveness.cancelled() => None,
        text = provider.reply(&sent) => Some(text),
    };

    let posted = writer.post_reply(&liveness, reply, || {
        lock_exchange(&exchange).reply_settled();
    });
    if posted.is_none() {
        debug!("Discarding {} reply for torn-down composer", provider.mode());
    }
}

fn lock_exchange(exchange: &Mutex<ExchangeState>) -> MutexGuard<'_, ExchangeState> {
    exchange.lock().unwrap_or_else(PoisonError::into_inner)
}
