//! Message widget — one chat message as a role label plus its text

use chatbot_domain::{Message, Role};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

/// Label shown before a message of the given role
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You:",
        Role::Bot => "Bot:",
    }
}

pub fn role_color(role: Role) -> Color {
    match role {
        Role::User => Color::Cyan,
        Role::Bot => Color::Green,
    }
}

/// Lines for a single message.
///
/// The first line carries the bold role label; continuation lines of a
/// multi-line text are indented to line up under the first.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let role = message.role();
    let label = role_label(role);
    let label_style = Style::default()
        .fg(role_color(role))
        .add_modifier(Modifier::BOLD);
    let indent = " ".repeat(label.len() + 1);

    message
        .text()
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(vec![
                    Span::styled(label, label_style),
                    Span::raw(" "),
                    Span::raw(line.to_string()),
                ])
            } else {
                Line::from(format!("{}{}", indent, line))
            }
        })
        .collect()
}

pub struct MessageWidget<'a> {
    message: &'a Message,
}

impl<'a> MessageWidget<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::from(message_lines(self.message)))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
