//! Per-widget conversation state

use super::lock;
use crate::ports::conversation_store::ConversationStore;
use chatbot_domain::{Conversation, Message, MessageId, MessageIdGenerator};
use std::sync::Mutex;
use tokio::sync::watch;
use tracing::trace;

/// Conversation store owned by one widget instance.
pub struct LocalConversationStore {
    conversation: Mutex<Conversation>,
    ids: MessageIdGenerator,
    revision: watch::Sender<u64>,
}

impl Default for LocalConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalConversationStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            conversation: Mutex::new(Conversation::new()),
            ids: MessageIdGenerator::new(),
            revision,
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

impl ConversationStore for LocalConversationStore {
    fn append_next(&self, build: Box<dyn FnOnce(MessageId) -> Message + '_>) -> Message {
        let message = {
            let mut conversation = lock(&self.conversation);
            let message = build(self.ids.next_id());
            conversation.push(message.clone());
            message
        };
        trace!("local store append id={}", message.id());
        self.bump();
        message
    }

    fn clear(&self) {
        lock(&self.conversation).clear();
        self.bump();
    }

    fn messages(&self) -> Vec<Message> {
        lock(&self.conversation).messages().to_vec()
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn len(&self) -> usize {
        lock(&self.conversation).len()
    }
}
