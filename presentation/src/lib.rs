//! Presentation layer for custom-chatbot
//!
//! This crate contains the CLI definition, the ratatui chat window and
//! the plain line-mode front end.

pub mod chat;
pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use chat::repl::ChatRepl;
pub use cli::commands::{Cli, Command, WidgetVariant};
pub use output::console::ConsoleFormatter;
pub use tui::{TuiApp, TuiState};
