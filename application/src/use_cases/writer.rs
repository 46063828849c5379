//! Conversation writer
//!
//! Every append a widget makes goes through its [`ConversationWriter`].
//! Ids come from the store's own sequence ([`ConversationStore::append_next`]),
//! so they stay unique and follow append order even when several widgets
//! share one store. The writer adds a gate around each append and its
//! observer call, and the reply path checks the composer's liveness under
//! that same gate, so [`ConversationWriter::cancel`] cleanly separates
//! replies that landed from replies that are discarded.

use crate::ports::conversation_store::ConversationStore;
use crate::ports::message_observer::{MessageObserver, NoMessageObserver};
use chatbot_domain::{DomainError, Message, Role, truncate};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Writer of one widget into its conversation store
pub struct ConversationWriter {
    store: Arc<dyn ConversationStore>,
    observer: Arc<dyn MessageObserver>,
    gate: Mutex<()>,
}

impl ConversationWriter {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self {
            store,
            observer: Arc::new(NoMessageObserver),
            gate: Mutex::new(()),
        }
    }

    /// Create with an `onMessage` observer.
    pub fn with_observer(mut self, observer: Arc<dyn MessageObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    /// Append a user message built from raw input (trimmed, non-empty).
    pub fn post_user(&self, raw: &str) -> Result<Message, DomainError> {
        let text = Message::user_text(raw)?.to_string();
        let _gate = self.lock_gate();
        Ok(self.commit(Role::User, text))
    }

    /// Append a bot message.
    pub fn post_bot(&self, text: impl Into<String>) -> Message {
        let _gate = self.lock_gate();
        self.commit(Role::Bot, text.into())
    }

    /// Settle one reply task.
    ///
    /// Appends `reply` unless `liveness` is cancelled, then runs `settle`.
    /// Both happen under the gate, so a reader that also takes the gate
    /// ([`ConversationWriter::with_gate`]) never sees the exchange settled
    /// without the bot message, and a reply is either appended before
    /// [`ConversationWriter::cancel`] returns or not at all.
    pub fn post_reply(
        &self,
        liveness: &CancellationToken,
        reply: Option<String>,
        settle: impl FnOnce(),
    ) -> Option<Message> {
        let _gate = self.lock_gate();
        let posted = match reply {
            Some(text) if !liveness.is_cancelled() => Some(self.commit(Role::Bot, text)),
            _ => None,
        };
        settle();
        posted
    }

    /// Cancel `liveness` once no reply is midway through being appended.
    pub fn cancel(&self, liveness: &CancellationToken) {
        let _gate = self.lock_gate();
        liveness.cancel();
    }

    /// Run `f` while no append is in progress.
    ///
    /// Must not be called from a [`MessageObserver`] of this writer.
    pub fn with_gate<R>(&self, f: impl FnOnce() -> R) -> R {
        let _gate = self.lock_gate();
        f()
    }

    pub fn clear(&self) {
        let _gate = self.lock_gate();
        self.store.clear();
        debug!("Conversation cleared");
    }

    fn lock_gate(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn commit(&self, role: Role, text: String) -> Message {
        let message = self
            .store
            .append_next(Box::new(move |id| Message::new(id, role, text)));
        debug!(
            "Appended {} message {}: {}",
            message.role(),
            message.id(),
            truncate(message.text(), 80)
        );
        self.observer.on_message(&message);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::message_observer::FnMessageObserver;
    use crate::store::local::LocalConversationStore;
    use crate::store::shared::ChatStore;
    use chatbot_domain::Role;

    #[test]
    fn test_post_user_trims_and_appends() {
        let store = Arc::new(LocalConversationStore::new());
        let writer = ConversationWriter::new(store.clone());

        let message = writer.post_user("  hello  ").unwrap();
        assert_eq!(message.text(), "hello");
        assert_eq!(store.messages(), vec![message]);
    }

    #[test]
    fn test_post_user_rejects_blank_without_append() {
        let store = Arc::new(LocalConversationStore::new());
        let writer = ConversationWriter::new(store.clone());

        assert_eq!(writer.post_user("  "), Err(DomainError::EmptyMessage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_follow_append_order() {
        let store = Arc::new(LocalConversationStore::new());
        let writer = ConversationWriter::new(store.clone());

        writer.post_user("a").unwrap();
        writer.post_bot("b");
        writer.post_user("c").unwrap();

        let ids: Vec<_> = store.messages().iter().map(|m| m.id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_observer_sees_every_append_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let store = Arc::new(LocalConversationStore::new());
        let writer = ConversationWriter::new(store).with_observer(Arc::new(
            FnMessageObserver::new(move |m: &Message| {
                sink.lock().unwrap().push((m.role(), m.text().to_string()));
            }),
        ));

        writer.post_user("hello").unwrap();
        writer.post_bot("Echo: hello");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (Role::User, "hello".to_string()),
                (Role::Bot, "Echo: hello".to_string())
            ]
        );
    }

    #[test]
    fn test_writers_sharing_a_store_never_reuse_ids() {
        let store: Arc<dyn ConversationStore> = Arc::new(ChatStore::new());
        let left = ConversationWriter::new(store.clone());
        let right = ConversationWriter::new(store.clone());

        for i in 0..20 {
            left.post_user(&format!("left {}", i)).unwrap();
            right.post_bot(format!("right {}", i));
        }

        let ids: Vec<_> = store.messages().iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), 40);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reply_after_cancel_is_discarded_but_settled() {
        let store = Arc::new(LocalConversationStore::new());
        let writer = ConversationWriter::new(store.clone());
        let liveness = CancellationToken::new();
        let mut settled = 0;

        let posted = writer.post_reply(&liveness, Some("first".into()), || settled += 1);
        assert_eq!(posted.map(|m| m.text().to_string()), Some("first".to_string()));

        writer.cancel(&liveness);
        assert!(liveness.is_cancelled());
        assert!(writer.post_reply(&liveness, Some("late".into()), || settled += 1).is_none());
        assert!(writer.post_reply(&liveness, None, || settled += 1).is_none());

        assert_eq!(settled, 3);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_settle_runs_after_append() {
        let store = Arc::new(LocalConversationStore::new());
        let writer = ConversationWriter::new(store.clone());
        let seen_len = std::cell::Cell::new(0);

        writer.post_reply(&CancellationToken::new(), Some("hi".into()), || {
            seen_len.set(store.len())
        });
        assert_eq!(seen_len.get(), 1);
    }

    #[test]
    fn test_concurrent_posts_keep_id_order() {
        let store = Arc::new(LocalConversationStore::new());
        let writer = Arc::new(ConversationWriter::new(store.clone()));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let writer = writer.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        writer.post_bot(format!("{}-{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let messages = store.messages();
        assert_eq!(messages.len(), 200);
        assert!(messages.windows(2).all(|w| w[0].id() < w[1].id()));
    }
}
