//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! ([`WidgetOptions`](chatbot_application::WidgetOptions)) at the edge.

mod app;
mod output;
mod transcript;
mod tui;
mod widget;

pub use app::FileAppConfig;
pub use output::FileOutputConfig;
pub use transcript::FileTranscriptConfig;
pub use tui::FileTuiConfig;
pub use widget::FileWidgetConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Standalone widget settings
    pub widget: FileWidgetConfig,
    /// Connected demo app settings
    pub app: FileAppConfig,
    /// Message transcript settings
    pub transcript: FileTranscriptConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Plain output settings
    pub output: FileOutputConfig,
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem detected in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues never abort startup; callers log them.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let api_url = self.widget.api_url.trim();
        if !api_url.is_empty() {
            match reqwest::Url::parse(api_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => issues.push(ConfigIssue::warning(
                    "widget.api_url",
                    format!("unsupported scheme '{}', expected http or https", url.scheme()),
                )),
                Err(e) => issues.push(ConfigIssue::warning(
                    "widget.api_url",
                    format!("'{}' is not a valid URL: {}", api_url, e),
                )),
            }
        }

        if self.widget.request_timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "widget.request_timeout_secs",
                "a zero timeout makes every remote reply fail",
            ));
        }

        issues
    }
}
