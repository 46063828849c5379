//! Standalone widget configuration from TOML (`[widget]` section)

use chatbot_application::WidgetOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw standalone widget configuration
///
/// # Example
///
/// ```toml
/// [widget]
/// api_url = "http://localhost:8080/chat"
/// echo_delay_ms = 200
/// request_timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWidgetConfig {
    /// Reply endpoint; empty selects local echo mode
    pub api_url: String,
    /// Delay of the local echo reply in milliseconds
    pub echo_delay_ms: u64,
    /// Timeout of one request to the reply endpoint in seconds
    pub request_timeout_secs: u64,
}

impl Default for FileWidgetConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            echo_delay_ms: 200,
            request_timeout_secs: 30,
        }
    }
}

impl FileWidgetConfig {
    pub fn to_widget_options(&self) -> WidgetOptions {
        WidgetOptions::new()
            .with_api_url(self.api_url.trim())
            .with_echo_delay(Duration::from_millis(self.echo_delay_ms))
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}
