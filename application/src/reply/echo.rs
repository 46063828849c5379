//! Local echo reply provider

use super::ReplyProvider;
use crate::config::ReplyMode;
use async_trait::async_trait;
use std::time::Duration;

/// Prefix of every echo reply
pub const ECHO_PREFIX: &str = "Echo: ";

/// Replies with the sent text after a fixed delay, without any I/O.
#[derive(Debug, Clone)]
pub struct EchoReplyProvider {
    delay: Duration,
}

impl EchoReplyProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ReplyProvider for EchoReplyProvider {
    fn mode(&self) -> ReplyMode {
        ReplyMode::Echo
    }

    async fn reply(&self, text: &str) -> String {
        tokio::time::sleep(self.delay).await;
        format!("{}{}", ECHO_PREFIX, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_echo_reply_after_delay() {
        let provider = EchoReplyProvider::new(Duration::from_millis(300));
        let start = Instant::now();

        let reply = provider.reply("hello").await;

        assert_eq!(reply, "Echo: hello");
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert_eq!(provider.mode(), ReplyMode::Echo);
    }
}
