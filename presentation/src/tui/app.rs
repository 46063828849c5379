//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream  → KeyHandler → Action → Composer
//!   ├─ store revision watch   → TuiState::sync (messages appended by reply tasks)
//!   └─ tick_interval          → flash expiry, phase refresh
//! ```
//!
//! Reply tasks run detached on the tokio runtime and write straight to the
//! store; the loop only ever reads the store back through the watch channel.

use super::keymap::{Action, KeyHandler};
use super::render::render;
use super::state::TuiState;
use chatbot_application::{ChatWidget, PendingReply};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

const FLASH_TTL: Duration = Duration::from_secs(3);

/// Main TUI application
pub struct TuiApp {
    widget: ChatWidget,
    state: TuiState,
}

impl TuiApp {
    pub fn new(widget: ChatWidget, state: TuiState) -> Self {
        let mut app = Self { widget, state };
        app.state.sync(&app.widget);
        app
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut store_rx = self.widget.subscribe();
        let mut tick = tokio::time::interval(Duration::from_millis(250));
        info!("TUI started");

        let result = loop {
            if let Err(e) = terminal.draw(|frame| render(frame, &self.state)) {
                break Err(e);
            }

            if self.state.should_quit {
                break Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(term_event) = event_stream.next() => {
                    match term_event {
                        Ok(Event::Key(key)) => {
                            self.handle_key(key);
                        }
                        Ok(_) => {
                            // Resize and the rest redraw on the next pass
                        }
                        Err(e) => break Err(e),
                    }
                }

                // Messages appended or conversation cleared
                Ok(()) = store_rx.changed() => {
                    self.state.sync(&self.widget);
                }

                // Tick for flash expiry and phase refresh
                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_TTL);
                    self.state.sync(&self.widget);
                }
            }
        };

        // Replies still in flight are dropped with the window
        self.widget.composer().teardown();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("TUI stopped");

        result
    }

    /// Handle a key press from the terminal
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PendingReply> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.apply_action(KeyHandler::handle(key))
    }

    /// Apply a semantic action and refresh the state snapshot.
    ///
    /// Returns the reply handle when the action sent a message.
    pub fn apply_action(&mut self, action: Action) -> Option<PendingReply> {
        let mut pending = None;

        match action {
            Action::Send | Action::InsertChar(_) | Action::DeleteChar => {
                if let Some(key) = action.composer_key() {
                    pending = self.widget.composer_mut().on_key(key);
                }
                if pending.is_some() {
                    self.state.scroll_to_bottom();
                }
            }
            Action::ClearConversation => {
                self.widget.composer().clear_conversation();
                self.state.set_flash("Conversation cleared");
                debug!("Conversation cleared from TUI");
            }
            Action::ScrollUp => self.state.scroll_up(),
            Action::ScrollDown => self.state.scroll_down(),
            Action::ScrollToBottom => self.state.scroll_to_bottom(),
            Action::Quit => self.state.should_quit = true,
            Action::None => {}
        }

        self.state.sync(&self.widget);
        pending
    }
}
