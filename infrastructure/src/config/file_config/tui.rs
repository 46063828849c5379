//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration
///
/// # Example
///
/// ```toml
/// [tui]
/// placeholder = "Type a message"
/// empty_text = "Say hello 👋"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Hint shown in the empty input box
    pub placeholder: String,
    /// Text shown in the chat window before the first message
    pub empty_text: String,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type a message".to_string(),
            empty_text: "Say hello 👋".to_string(),
        }
    }
}
