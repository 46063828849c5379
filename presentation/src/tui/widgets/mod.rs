//! TUI widgets — ratatui components for the chat window
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Conversation (flex) ───────────────────────────┤
//! ├── Input (3) ─────────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod chat_window;
pub mod header;
pub mod input;
pub mod message;
pub mod status_bar;

pub use chat_window::ChatWindowWidget;
pub use header::HeaderWidget;
pub use input::InputWidget;
pub use message::{MessageWidget, message_lines, role_label};
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub conversation: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    const HEADER_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::HEADER_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Length(Self::STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            header: vertical[0],
            conversation: vertical[1],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack_vertically() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.conversation.height, 24 - 3 - 3 - 1);
        assert_eq!(layout.conversation.y, 3);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_panic() {
        let layout = MainLayout::compute(Rect::new(0, 0, 10, 4));
        assert!(layout.conversation.height <= 4);
    }
}
