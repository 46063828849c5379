//! Console output formatter for chat messages

use crate::tui::widgets::role_label;
use chatbot_domain::{Message, Role};
use colored::Colorize;

/// Formats messages and banners for line-mode display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one message as `You: text` / `Bot: text`.
    ///
    /// Continuation lines of a multi-line text are indented under the first.
    pub fn format_message(message: &Message, color: bool) -> String {
        let label = role_label(message.role());
        let styled_label = if color {
            match message.role() {
                Role::User => label.cyan().bold().to_string(),
                Role::Bot => label.green().bold().to_string(),
            }
        } else {
            label.to_string()
        };

        let (first, rest) = match message.text().split_once('\n') {
            Some((first, rest)) => (first, Some(rest)),
            None => (message.text(), None),
        };
        let mut out = format!("{} {}", styled_label, first);
        if let Some(rest) = rest {
            out.push('\n');
            out.push_str(&Self::indent(rest, &" ".repeat(label.len() + 1)));
        }
        out
    }

    /// Banner printed when line mode starts
    pub fn welcome(title: &str, details: &str, color: bool) -> String {
        let line = "─".repeat(45);
        let title = format!("{:^45}", title);
        let title = if color {
            title.bold().to_string()
        } else {
            title
        };
        let details = if color {
            details.dimmed().to_string()
        } else {
            details.to_string()
        };
        format!("╭{}╮\n {}\n╰{}╯\n{}\n", line, title, line, details)
    }

    /// Short notice line (cleared, bye, ...)
    pub fn notice(text: &str, color: bool) -> String {
        if color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.split('\n')
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_domain::MessageId;

    #[test]
    fn test_format_user_message_plain() {
        let msg = Message::new(MessageId::new(1), Role::User, "hello");
        assert_eq!(ConsoleFormatter::format_message(&msg, false), "You: hello");
    }

    #[test]
    fn test_format_bot_message_plain() {
        let msg = Message::new(MessageId::new(2), Role::Bot, "Echo: hello");
        assert_eq!(
            ConsoleFormatter::format_message(&msg, false),
            "Bot: Echo: hello"
        );
    }

    #[test]
    fn test_format_multiline_message() {
        let msg = Message::new(MessageId::new(3), Role::Bot, "one\ntwo");
        assert_eq!(
            ConsoleFormatter::format_message(&msg, false),
            "Bot: one\n     two"
        );
    }

    #[test]
    fn test_colored_message_keeps_text() {
        let msg = Message::new(MessageId::new(4), Role::User, "hi");
        let out = ConsoleFormatter::format_message(&msg, true);
        assert!(out.contains("You:"));
        assert!(out.ends_with("hi"));
    }

    #[test]
    fn test_welcome_contains_title() {
        let banner = ConsoleFormatter::welcome("Custom Chatbot", "echo replies", false);
        assert!(banner.contains("Custom Chatbot"));
        assert!(banner.contains("echo replies"));
    }
}
