//! Domain layer for custom-chatbot
//!
//! This crate contains the core entities and value objects of the chat widget.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Message**: an immutable record of one utterance, either from the user or the bot
//! - **Conversation**: the ordered, append-only sequence of messages of one session
//! - **Exchange state**: `Idle → Composing → Sent(pending) → Idle`, tracked per conversation

pub mod conversation;
pub mod core;
pub mod exchange;
pub mod message;

// Re-export commonly used types
pub use conversation::Conversation;
pub use core::{error::DomainError, string::truncate};
pub use exchange::{ExchangePhase, ExchangeState};
pub use message::{
    entities::{Message, Role},
    id::{MessageId, MessageIdGenerator},
};
