//! Reply providers
//!
//! A reply provider turns the text of a sent user message into the text of
//! the bot's answer. Both variants are infallible from the caller's point
//! of view: failures are folded into the returned text.

pub mod echo;
pub mod remote;

use crate::config::ReplyMode;
use async_trait::async_trait;

/// Producer of bot replies
#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Which variant this provider is
    fn mode(&self) -> ReplyMode;

    /// Produce the bot reply for `text`.
    async fn reply(&self, text: &str) -> String;
}
