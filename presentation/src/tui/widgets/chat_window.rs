//! Chat window widget — the conversation, or a placeholder when empty

use super::message::message_lines;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ChatWindowWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ChatWindowWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn format_messages(&self) -> Text<'static> {
        let mut lines: Vec<Line> = Vec::new();
        for msg in &self.state.messages {
            lines.extend(message_lines(msg));
        }
        Text::from(lines)
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White))
    }
}

impl<'a> Widget for ChatWindowWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.messages.is_empty() {
            let placeholder = Line::styled(
                self.state.empty_text.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            Paragraph::new(placeholder)
                .alignment(Alignment::Center)
                .block(self.block())
                .render(area, buf);
            return;
        }

        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2);

        // Measure without the block so line_count is content only
        let paragraph = Paragraph::new(self.format_messages()).wrap(Wrap { trim: false });
        let scroll = scroll_from_top(
            paragraph.line_count(content_width),
            visible_height,
            self.state.scroll_offset,
        );

        paragraph
            .block(self.block())
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

/// Rows to skip from the top so that `offset` counts lines up from the bottom.
///
/// Counts past `u16::MAX` saturate, matching ratatui's `u16` scroll.
fn scroll_from_top(total_lines: usize, visible_height: u16, offset: usize) -> u16 {
    let total_lines = u16::try_from(total_lines).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(visible_height);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX).min(max_scroll);
    max_scroll - offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_domain::{Message, MessageId, Role};

    fn render_to_string(state: &TuiState, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        ChatWindowWidget::new(state).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn row(state: &TuiState, area: Rect, y: u16) -> String {
        let mut buf = Buffer::empty(area);
        ChatWindowWidget::new(state).render(area, &mut buf);
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_empty_conversation_shows_placeholder() {
        let state = TuiState::new();
        let content = render_to_string(&state, Rect::new(0, 0, 30, 5));
        assert!(content.contains("Say hello"));
        assert!(!content.contains("You:"));
    }

    #[test]
    fn test_messages_render_in_order() {
        let mut state = TuiState::new();
        state.messages = vec![
            Message::new(MessageId::new(1), Role::User, "hello"),
            Message::new(MessageId::new(2), Role::Bot, "Echo: hello"),
        ];
        let area = Rect::new(0, 0, 30, 6);
        assert!(row(&state, area, 1).contains("You: hello"));
        assert!(row(&state, area, 2).contains("Bot: Echo: hello"));
        assert!(!render_to_string(&state, area).contains("Say hello"));
    }

    #[test]
    fn test_newest_messages_stay_visible() {
        let mut state = TuiState::new();
        state.messages = (1..=10)
            .map(|i| Message::new(MessageId::new(i), Role::User, format!("m{}", i)))
            .collect();
        // 3 inner rows
        let area = Rect::new(0, 0, 20, 5);
        assert!(row(&state, area, 3).contains("m10"));
        assert!(!render_to_string(&state, area).contains("m1 "));

        state.scroll_offset = 2;
        assert!(row(&state, area, 3).contains("m8"));

        // Offset is clamped to the top of the conversation
        state.scroll_offset = 100;
        assert!(row(&state, area, 1).contains("m1"));
    }

    #[test]
    fn test_scroll_from_top_anchors_to_bottom() {
        assert_eq!(scroll_from_top(5, 10, 0), 0);
        assert_eq!(scroll_from_top(30, 10, 0), 20);
        assert_eq!(scroll_from_top(30, 10, 5), 15);
        assert_eq!(scroll_from_top(30, 10, 99), 0);
    }

    #[test]
    fn test_scroll_from_top_saturates_huge_line_counts() {
        // Saturates instead of wrapping to 10
        assert_eq!(scroll_from_top(65_546, 10, 0), u16::MAX - 10);
        assert_eq!(scroll_from_top(usize::MAX, 10, usize::MAX), 0);
    }
}
