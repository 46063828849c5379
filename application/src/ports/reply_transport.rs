//! Reply transport port
//!
//! Defines how the remote reply provider reaches the configured HTTP
//! endpoint. The HTTP implementation lives in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while calling the reply endpoint
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Timeout")]
    Timeout,
}

/// JSON body posted to the reply endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub message: String,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transport for the remote reply endpoint
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    /// POST `request` as JSON to `endpoint` and return the parsed JSON body.
    async fn post_message(
        &self,
        endpoint: &str,
        request: &ReplyRequest,
    ) -> Result<serde_json::Value, TransportError>;
}
