//! Input widget — single-line composer with prompt, cursor, and placeholder

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = Color::Green;
        let prompt_span = Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
        let cursor_style = Style::default().fg(Color::Black).bg(color);

        let line = if self.state.input.is_empty() {
            // Cursor sits on the first placeholder character
            let mut chars = self.state.placeholder.chars();
            let first = chars.next().map(String::from).unwrap_or_else(|| " ".into());
            Line::from(vec![
                prompt_span,
                Span::styled(first, cursor_style),
                Span::styled(chars.as_str().to_string(), Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                prompt_span,
                Span::raw(self.state.input.clone()),
                Span::styled(" ", cursor_style),
            ])
        };

        // Keep the end of long input (and the cursor) in view
        let inner_width = area.width.saturating_sub(2) as usize;
        let used = PROMPT.len() + self.state.input.chars().count() + 1;
        let scroll_x = used.saturating_sub(inner_width) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .style(Style::default().fg(color));

        Paragraph::new(line)
            .block(block)
            .scroll((0, scroll_x))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &TuiState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(state).render(area, &mut buf);
        (0..width).map(|x| buf[(x, 1)].symbol().to_string()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let state = TuiState::new();
        let row = render(&state, 40);
        assert!(row.contains("> Type a message"));
    }

    #[test]
    fn test_pending_text_replaces_placeholder() {
        let mut state = TuiState::new();
        state.input = "hello".into();
        let row = render(&state, 40);
        assert!(row.contains("> hello"));
        assert!(!row.contains("Type a message"));
    }

    #[test]
    fn test_long_input_keeps_tail_visible() {
        let mut state = TuiState::new();
        state.input = format!("{}END", "x".repeat(50));
        let row = render(&state, 20);
        assert!(row.contains("END"));
    }
}
