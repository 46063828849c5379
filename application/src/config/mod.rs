//! Widget configuration
//!
//! [`WidgetOptions`] is the configuration object a host hands to the chat
//! widget: the optional reply endpoint and the `onMessage` hook, plus the
//! timing knobs of the two reply variants.

use crate::ports::message_observer::MessageObserver;
use crate::ports::reply_transport::ReplyTransport;
use crate::reply::{ReplyProvider, echo::EchoReplyProvider, remote::RemoteReplyProvider};
use std::sync::Arc;
use std::time::Duration;

/// Echo delay of the standalone widget
pub const DEFAULT_WIDGET_ECHO_DELAY: Duration = Duration::from_millis(200);

/// Echo delay of the connected demo app
pub const DEFAULT_APP_ECHO_DELAY: Duration = Duration::from_millis(300);

/// Default timeout for one call to the reply endpoint
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How bot replies are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    /// Local, delayed echo of the sent text
    Echo,
    /// POST to the configured endpoint
    Remote,
}

impl ReplyMode {
    /// An empty (or blank) endpoint selects echo mode.
    pub fn from_api_url(api_url: &str) -> Self {
        if api_url.trim().is_empty() {
            ReplyMode::Echo
        } else {
            ReplyMode::Remote
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyMode::Echo => "echo",
            ReplyMode::Remote => "remote",
        }
    }
}

impl std::fmt::Display for ReplyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options recognized by the chat widget
#[derive(Clone)]
pub struct WidgetOptions {
    /// Reply endpoint; empty means local echo
    pub api_url: String,
    /// Invoked after every appended message
    pub on_message: Option<Arc<dyn MessageObserver>>,
    /// Delay of the echo reply
    pub echo_delay: Duration,
    /// Timeout applied by the HTTP transport
    pub request_timeout: Duration,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            on_message: None,
            echo_delay: DEFAULT_WIDGET_ECHO_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for WidgetOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetOptions")
            .field("api_url", &self.api_url)
            .field("on_message", &self.on_message.is_some())
            .field("echo_delay", &self.echo_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl WidgetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_on_message(mut self, observer: Arc<dyn MessageObserver>) -> Self {
        self.on_message = Some(observer);
        self
    }

    pub fn with_echo_delay(mut self, delay: Duration) -> Self {
        self.echo_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn reply_mode(&self) -> ReplyMode {
        ReplyMode::from_api_url(&self.api_url)
    }

    /// Build the reply provider selected by `api_url`.
    ///
    /// `transport` is only used in remote mode.
    pub fn reply_provider(&self, transport: Arc<dyn ReplyTransport>) -> Arc<dyn ReplyProvider> {
        match self.reply_mode() {
            ReplyMode::Echo => Arc::new(EchoReplyProvider::new(self.echo_delay)),
            ReplyMode::Remote => Arc::new(RemoteReplyProvider::new(
                self.api_url.trim().to_string(),
                transport,
            )),
        }
    }
}
