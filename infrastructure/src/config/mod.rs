//! Configuration file loading for custom-chatbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CHATBOT_<SECTION>__<KEY>` (e.g. `CHATBOT_WIDGET__API_URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatbot.toml` or `./.chatbot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/custom-chatbot/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAppConfig, FileConfig, FileOutputConfig, FileTranscriptConfig,
    FileTuiConfig, FileWidgetConfig, Severity,
};
pub use loader::ConfigLoader;
