//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Conversation
//! data is a snapshot pulled from the chat widget after every event; the
//! rest (scrolling, flash messages, quit flag) is owned by the TUI.

use crate::cli::commands::WidgetVariant;
use chatbot_application::{ChatWidget, ReplyMode};
use chatbot_domain::{ExchangePhase, Message};
use std::time::{Duration, Instant};

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Chrome --
    pub title: String,
    pub variant: WidgetVariant,
    pub reply_mode: ReplyMode,
    pub placeholder: String,
    pub empty_text: String,

    // -- Snapshot of the widget --
    pub messages: Vec<Message>,
    pub input: String,
    pub phase: ExchangePhase,

    // -- Conversation view --
    /// Lines scrolled up from the bottom; 0 shows the newest messages
    pub scroll_offset: usize,

    // -- Overlay --
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            title: "Custom Chatbot".to_string(),
            variant: WidgetVariant::Standalone,
            reply_mode: ReplyMode::Echo,
            placeholder: "Type a message".to_string(),
            empty_text: "Say hello 👋".to_string(),
            messages: Vec::new(),
            input: String::new(),
            phase: ExchangePhase::Idle,
            scroll_offset: 0,
            flash_message: None,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_variant(mut self, variant: WidgetVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }

    /// Pull the current conversation, pending text and phase from `widget`.
    pub fn sync(&mut self, widget: &ChatWidget) {
        let messages = widget.messages();
        if messages.len() < self.messages.len() {
            // Conversation was cleared
            self.scroll_offset = 0;
        }
        self.messages = messages;
        self.input = widget.composer().pending_text().to_string();
        self.phase = widget.phase();
        self.reply_mode = widget.reply_mode();
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    // -- Flash --

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= ttl
        {
            self.flash_message = None;
        }
    }
}
