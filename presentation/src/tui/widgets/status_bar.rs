//! Status bar widget — exchange phase + key hints + flash messages

use crate::tui::state::TuiState;
use chatbot_domain::ExchangePhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = "Enter:send  Ctrl+L:clear  ↑/↓:scroll  Esc:quit";

fn phase_color(phase: &ExchangePhase) -> Color {
    match phase {
        ExchangePhase::Idle => Color::Blue,
        ExchangePhase::Composing => Color::Green,
        ExchangePhase::Sent { .. } => Color::Yellow,
    }
}

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: phase indicator
        let phase_text = format!(" {} ", self.state.phase.label().to_uppercase());
        let phase_style = Style::default()
            .fg(Color::Black)
            .bg(phase_color(&self.state.phase))
            .add_modifier(Modifier::BOLD);
        let phase_width = phase_text.chars().count() as u16;
        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(phase_text, phase_style)),
            phase_width,
        );

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.as_str(),
            None => KEY_HINTS,
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + phase_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
