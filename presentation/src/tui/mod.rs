//! TUI (Text User Interface) module for custom-chatbot
//!
//! Renders one chat widget in the terminal using ratatui: a header, the
//! conversation view, the composer input and a status bar.

mod app;
mod keymap;
mod render;
mod state;
pub mod widgets;

pub use app::TuiApp;
pub use keymap::{Action, KeyHandler};
pub use state::TuiState;
pub use widgets::{
    ChatWindowWidget, HeaderWidget, InputWidget, MainLayout, MessageWidget, StatusBarWidget,
    message_lines,
};
