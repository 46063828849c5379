//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which chat widget variant to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum WidgetVariant {
    /// Widget with its own local state; echo or remote replies
    #[default]
    Standalone,
    /// Demo app bound to a shared store; always echoes
    Connected,
}

impl WidgetVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetVariant::Standalone => "standalone",
            WidgetVariant::Connected => "connected",
        }
    }
}

impl std::fmt::Display for WidgetVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run modes
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Standalone chat widget (default)
    Widget {
        /// Reply endpoint; leave unset for local echo replies
        #[arg(long, value_name = "URL", env = "CHATBOT_API_URL")]
        api_url: Option<String>,
    },
    /// Connected demo app backed by the shared store
    App,
}

/// CLI arguments for custom-chatbot
#[derive(Parser, Debug)]
#[command(name = "custom-chatbot")]
#[command(author, version, about = "Terminal chat widget with local echo or HTTP replies")]
#[command(long_about = r#"
Custom Chatbot renders a chat window in the terminal. Messages you send are
answered either by a local echo or by an HTTP endpoint that receives
{"message": "..."} and returns {"reply": "..."}.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./chatbot.toml      Project-level config
3. ~/.config/custom-chatbot/config.toml   Global config

Example:
  custom-chatbot
  custom-chatbot widget --api-url http://localhost:8080/chat
  custom-chatbot app --plain
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Line-mode chat on stdin/stdout instead of the full-screen window
    #[arg(long, global = true)]
    pub plain: bool,

    /// Append every message to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

impl Cli {
    /// The widget variant selected by the subcommand
    pub fn variant(&self) -> WidgetVariant {
        match self.command {
            Some(Command::App) => WidgetVariant::Connected,
            Some(Command::Widget { .. }) | None => WidgetVariant::Standalone,
        }
    }

    /// The `--api-url` override, if any
    pub fn api_url(&self) -> Option<&str> {
        match &self.command {
            Some(Command::Widget { api_url }) => api_url.as_deref(),
            _ => None,
        }
    }
}
