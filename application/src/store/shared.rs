//! Shared, reducer-driven conversation store
//!
//! Holds a `chat` state slice that is only changed by dispatching
//! [`ChatAction`]s through [`chat_reducer`]. Any number of components may
//! hold the same `Arc<ChatStore>`; the store itself is an ordinary value,
//! not a process-wide singleton.

use super::lock;
use crate::ports::conversation_store::ConversationStore;
use chatbot_domain::{Message, MessageId, MessageIdGenerator};
use std::sync::Mutex;
use tokio::sync::watch;
use tracing::trace;

/// Actions accepted by the chat slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    AddMessage(Message),
    ClearMessages,
}

/// The `chat` slice of the shared store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<Message>,
}

/// Apply one action to the chat slice.
pub fn chat_reducer(state: &mut ChatState, action: ChatAction) {
    match action {
        ChatAction::AddMessage(message) => state.messages.push(message),
        ChatAction::ClearMessages => state.messages.clear(),
    }
}

/// Store shared by every component of the connected app
pub struct ChatStore {
    state: Mutex<ChatState>,
    ids: MessageIdGenerator,
    revision: watch::Sender<u64>,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Mutex::new(ChatState::default()),
            ids: MessageIdGenerator::new(),
            revision,
        }
    }

    /// Run `action` through the reducer and notify subscribers.
    pub fn dispatch(&self, action: ChatAction) {
        trace!("dispatch {:?}", action);
        chat_reducer(&mut lock(&self.state), action);
        self.notify();
    }

    fn notify(&self) {
        self.revision.send_modify(|r| *r += 1);
    }

    /// Read a value derived from the current state.
    pub fn select<R>(&self, selector: impl FnOnce(&ChatState) -> R) -> R {
        selector(&lock(&self.state))
    }
}

impl ConversationStore for ChatStore {
    fn append_next(&self, build: Box<dyn FnOnce(MessageId) -> Message + '_>) -> Message {
        let message = {
            let mut state = lock(&self.state);
            let message = build(self.ids.next_id());
            trace!("dispatch AddMessage id={}", message.id());
            chat_reducer(&mut state, ChatAction::AddMessage(message.clone()));
            message
        };
        self.notify();
        message
    }

    fn clear(&self) {
        self.dispatch(ChatAction::ClearMessages);
    }

    fn messages(&self) -> Vec<Message> {
        self.select(|s| s.messages.clone())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn len(&self) -> usize {
        self.select(|s| s.messages.len())
    }
}
