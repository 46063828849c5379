//! Connected demo app configuration from TOML (`[app]` section)

use chatbot_application::WidgetOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw connected app configuration
///
/// The app always echoes locally, so there is no endpoint here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAppConfig {
    /// Heading shown above the chat window
    pub title: String,
    /// Delay of the local echo reply in milliseconds
    pub echo_delay_ms: u64,
}

impl Default for FileAppConfig {
    fn default() -> Self {
        Self {
            title: "Custom Chatbot".to_string(),
            echo_delay_ms: 300,
        }
    }
}

impl FileAppConfig {
    pub fn to_widget_options(&self) -> WidgetOptions {
        WidgetOptions::new().with_echo_delay(Duration::from_millis(self.echo_delay_ms))
    }
}
