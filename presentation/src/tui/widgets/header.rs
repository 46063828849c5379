//! Header widget — shows title, widget variant, and reply mode

use crate::tui::state::TuiState;
use chatbot_application::ReplyMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode_color = match self.state.reply_mode {
            ReplyMode::Echo => Color::Cyan,
            ReplyMode::Remote => Color::Magenta,
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                self.state.variant.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} replies", self.state.reply_mode.as_str()),
                Style::default().fg(mode_color),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} messages", self.state.messages.len()),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.state.title))
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
