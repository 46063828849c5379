//! Key bindings
//!
//! The input box always has focus, so printable keys edit the pending
//! text and Enter sends it. Everything else is a chord or a navigation key.

use chatbot_application::ComposerKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Send the pending text (Enter)
    Send,
    /// Append a character to the pending text
    InsertChar(char),
    /// Remove the last character (Backspace)
    DeleteChar,
    /// Clear the whole conversation (Ctrl+L)
    ClearConversation,
    /// Scroll conversation up
    ScrollUp,
    /// Scroll conversation down
    ScrollDown,
    /// Jump back to the newest message
    ScrollToBottom,
    /// Quit application
    Quit,
    /// No action
    None,
}

impl Action {
    /// The composer key this action feeds, if it edits or sends input
    pub fn composer_key(&self) -> Option<ComposerKey> {
        match self {
            Action::Send => Some(ComposerKey::Enter),
            Action::InsertChar(c) => Some(ComposerKey::Char(*c)),
            Action::DeleteChar => Some(ComposerKey::Backspace),
            _ => None,
        }
    }
}

/// Key event handler
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Action::Quit,
            KeyCode::Char('l') if ctrl => Action::ClearConversation,
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Action::None,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Enter => Action::Send,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::PageUp => Action::ScrollUp,
            KeyCode::Down | KeyCode::PageDown => Action::ScrollDown,
            KeyCode::End => Action::ScrollToBottom,
            _ => Action::None,
        }
    }
}
