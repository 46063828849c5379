//! Application layer for custom-chatbot
//!
//! This crate contains the conversation stores, reply providers, the
//! composer use case and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod reply;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ReplyMode, WidgetOptions};
pub use ports::{
    conversation_store::ConversationStore,
    message_observer::{FnMessageObserver, MessageObserver, NoMessageObserver},
    reply_transport::{ReplyRequest, ReplyTransport, TransportError},
};
pub use reply::{
    ReplyProvider,
    echo::{ECHO_PREFIX, EchoReplyProvider},
    remote::{RemoteReplyProvider, UNREACHABLE_SERVER_TEXT, extract_reply_text},
};
pub use store::{
    local::LocalConversationStore,
    shared::{ChatAction, ChatState, ChatStore, chat_reducer},
};
pub use use_cases::{
    composer::{Composer, ComposerKey, PendingReply},
    widget::ChatWidget,
    writer::ConversationWriter,
};
