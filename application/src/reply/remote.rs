//! Remote reply provider
//!
//! Posts `{"message": <text>}` to the configured endpoint and reads the
//! `reply` field of the JSON response. Every failure becomes a visible bot
//! message; nothing propagates to the caller.

use super::ReplyProvider;
use crate::config::ReplyMode;
use crate::ports::reply_transport::{ReplyRequest, ReplyTransport};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Bot text shown when the endpoint cannot be reached or answers garbage
pub const UNREACHABLE_SERVER_TEXT: &str = "Error: could not reach server";

/// Reply provider backed by an HTTP endpoint
pub struct RemoteReplyProvider {
    endpoint: String,
    transport: Arc<dyn ReplyTransport>,
}

impl RemoteReplyProvider {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn ReplyTransport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReplyProvider for RemoteReplyProvider {
    fn mode(&self) -> ReplyMode {
        ReplyMode::Remote
    }

    async fn reply(&self, text: &str) -> String {
        let request = ReplyRequest::new(text);
        match self.transport.post_message(&self.endpoint, &request).await {
            Ok(body) => {
                debug!("Reply endpoint {} answered", self.endpoint);
                extract_reply_text(&body)
            }
            Err(e) => {
                warn!("Reply endpoint {} failed: {}", self.endpoint, e);
                UNREACHABLE_SERVER_TEXT.to_string()
            }
        }
    }
}

/// Pick the bot text out of a reply body.
///
/// A string `reply` field is used as is; any other non-null `reply` is
/// rendered as JSON. Without a usable `reply` the whole body is
/// stringified: a bare JSON string loses its quotes, everything else is
/// compact JSON.
pub fn extract_reply_text(body: &Value) -> String {
    match body.get("reply") {
        Some(Value::String(reply)) => reply.clone(),
        Some(reply) if !reply.is_null() => reply.to_string(),
        _ => match body {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}
