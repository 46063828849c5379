//! Message domain entities

use super::id::MessageId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message (Entity)
///
/// Messages are immutable once created: fields are private and there are
/// no setters. A conversation only ever grows by appending new messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    text: String,
}

impl Message {
    pub fn new(id: MessageId, role: Role, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
        }
    }

    /// Build a user message from raw input.
    ///
    /// Surrounding whitespace is trimmed; input that is empty after
    /// trimming is rejected.
    pub fn user(id: MessageId, raw: &str) -> Result<Self, DomainError> {
        Ok(Self::new(id, Role::User, Self::user_text(raw)?))
    }

    /// The text a user message built from `raw` would carry.
    ///
    /// Lets callers reject blank input before an id is spent on it.
    pub fn user_text(raw: &str) -> Result<&str, DomainError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        Ok(text)
    }

    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Role::Bot, text)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_trimmed() {
        let msg = Message::user(MessageId::new(1), "  hello \n").unwrap();
        assert_eq!(msg.text(), "hello");
        assert_eq!(msg.role(), Role::User);
    }

    #[test]
    fn test_user_message_rejects_blank_input() {
        assert_eq!(
            Message::user(MessageId::new(1), "   \t"),
            Err(DomainError::EmptyMessage)
        );
        assert_eq!(
            Message::user(MessageId::new(1), ""),
            Err(DomainError::EmptyMessage)
        );
        assert_eq!(Message::user_text(" \n "), Err(DomainError::EmptyMessage));
        assert_eq!(Message::user_text(" hi "), Ok("hi"));
    }

    #[test]
    fn test_bot_message_keeps_text_verbatim() {
        let msg = Message::bot(MessageId::new(2), "Echo: hi ");
        assert_eq!(msg.text(), "Echo: hi ");
        assert_eq!(msg.role(), Role::Bot);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), "\"bot\"");
        assert_eq!(Role::User.to_string(), "user");
    }
}
