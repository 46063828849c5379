//! Conversation store port
//!
//! The store holds the ordered message sequence of one conversation and
//! notifies dependents whenever it changes. Validation is not its concern:
//! whatever is appended is kept.
//!
//! The store also owns the id sequence of its conversation. Every writer
//! that shares a store draws ids through [`ConversationStore::append_next`],
//! so ids stay unique and follow append order however many widgets write.

use chatbot_domain::{Message, MessageId};
use tokio::sync::watch;

/// Holder of conversation state.
///
/// Implementations must make `append_next` and `clear` atomic with respect to
/// each other and bump the revision published through [`subscribe`] after
/// every change, so views can re-render.
///
/// [`subscribe`]: ConversationStore::subscribe
pub trait ConversationStore: Send + Sync {
    /// Assign the next id of this conversation, build the message around
    /// it and append it, all under one lock.
    fn append_next(&self, build: Box<dyn FnOnce(MessageId) -> Message + '_>) -> Message;

    /// Drop every message.
    fn clear(&self);

    /// Snapshot of the current sequence, oldest first.
    fn messages(&self) -> Vec<Message>;

    /// Receiver of the store revision, bumped on every change.
    fn subscribe(&self) -> watch::Receiver<u64>;

    fn len(&self) -> usize {
        self.messages().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
