//! Line-mode REPL for interactive chat
//!
//! Each input line is handed to the composer as pending text and sent.
//! Output is driven by the store: whatever was appended since the last
//! print (the user's own message, replies landing later) is written out in
//! store order.

use crate::ConsoleFormatter;
use chatbot_application::{ChatWidget, PendingReply};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

/// Interactive line-mode chat
pub struct ChatRepl {
    widget: ChatWidget,
    title: String,
    color: bool,
    printed: usize,
    pending: Vec<PendingReply>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(widget: ChatWidget, title: impl Into<String>) -> Self {
        Self {
            widget,
            title: title.into(),
            color: true,
            printed: 0,
            pending: Vec::new(),
        }
    }

    /// Set whether to colorize output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    /// Run on the process stdin/stdout
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Run the REPL over arbitrary input and output streams.
    ///
    /// On end of input the REPL waits for replies still in flight and
    /// prints them before returning. `/quit` returns immediately and
    /// discards them.
    pub async fn run_with<R, W>(&mut self, input: R, mut out: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut store_rx = self.widget.subscribe();

        let details = format!(
            "{} replies. Type /help for commands.",
            self.widget.reply_mode().as_str()
        );
        out.write_all(ConsoleFormatter::welcome(&self.title, &details, self.color).as_bytes())
            .await?;
        self.print_new(&mut out).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if self.handle_line(&line, &mut out).await? {
                                break;
                            }
                        }
                        None => {
                            debug!("Input closed, waiting for {} replies", self.pending.len());
                            for reply in self.pending.drain(..) {
                                reply.settled().await;
                            }
                            self.print_new(&mut out).await?;
                            break;
                        }
                    }
                }

                Ok(()) = store_rx.changed() => {
                    self.print_new(&mut out).await?;
                }
            }
        }

        self.widget.composer().teardown();
        out.flush().await?;
        Ok(())
    }

    /// Handle one input line. Returns true when the REPL should stop.
    async fn handle_line<W: AsyncWrite + Unpin>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> std::io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return self.handle_command(trimmed, out).await;
        }

        self.widget.composer_mut().on_text_change(line);
        if let Some(reply) = self.widget.composer_mut().send() {
            self.pending.retain(|p| !p.is_settled());
            self.pending.push(reply);
        }
        self.print_new(out).await?;
        Ok(false)
    }

    async fn handle_command<W: AsyncWrite + Unpin>(
        &mut self,
        cmd: &str,
        out: &mut W,
    ) -> std::io::Result<bool> {
        let text = match cmd {
            "/quit" | "/exit" | "/q" => {
                out.write_all(format!("{}\n", ConsoleFormatter::notice("Bye!", self.color)).as_bytes())
                    .await?;
                return Ok(true);
            }
            "/clear" => {
                self.widget.composer().clear_conversation();
                self.printed = 0;
                ConsoleFormatter::notice("Conversation cleared", self.color)
            }
            "/help" | "/h" | "/?" => [
                "Commands:",
                "  /help, /h, /?    - Show this help",
                "  /clear           - Clear the conversation",
                "  /quit, /exit, /q - Exit chat",
            ]
            .join("\n"),
            _ => format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            ),
        };
        out.write_all(format!("{}\n", text).as_bytes()).await?;
        Ok(false)
    }

    /// Print every message appended since the last call.
    async fn print_new<W: AsyncWrite + Unpin>(&mut self, out: &mut W) -> std::io::Result<()> {
        let messages = self.widget.messages();
        if messages.len() < self.printed {
            // Cleared elsewhere (shared store)
            self.printed = 0;
        }
        for message in &messages[self.printed..] {
            let line = ConsoleFormatter::format_message(message, self.color);
            out.write_all(format!("{}\n", line).as_bytes()).await?;
        }
        self.printed = messages.len();
        out.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_application::{EchoReplyProvider, LocalConversationStore};
    use std::sync::Arc;
    use std::time::Duration;

    fn echo_repl() -> ChatRepl {
        let widget = ChatWidget::new(
            Arc::new(LocalConversationStore::new()),
            Arc::new(EchoReplyProvider::new(Duration::from_millis(200))),
            None,
        );
        ChatRepl::new(widget, "Custom Chatbot").with_color(false)
    }

    async fn run(repl: &mut ChatRepl, input: &str) -> String {
        let mut out = Vec::new();
        repl.run_with(input.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_and_wait_for_reply_on_eof() {
        let mut repl = echo_repl();
        let out = run(&mut repl, "hello\n").await;

        assert!(out.contains("Custom Chatbot"));
        assert!(out.contains("You: hello\nBot: Echo: hello\n"));
        assert_eq!(repl.widget().messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_lines_are_ignored() {
        let mut repl = echo_repl();
        let out = run(&mut repl, "   \n\nhi\n").await;

        assert_eq!(out.matches("You:").count(), 1);
        assert_eq!(repl.widget().messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_discards_in_flight_reply() {
        let mut repl = echo_repl();
        let out = run(&mut repl, "hello\n/quit\nnever sent\n").await;

        assert!(out.contains("You: hello"));
        assert!(out.contains("Bye!"));
        assert!(!out.contains("never sent"));
        assert!(repl.widget().composer().is_torn_down());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(repl.widget().messages().len(), 1);
    }

    #[tokio::test]
    async fn test_commands() {
        let mut repl = echo_repl();
        let out = run(&mut repl, "/help\n/clear\n/bogus\n").await;

        assert!(out.contains("/clear"));
        assert!(out.contains("Conversation cleared"));
        assert!(out.contains("Unknown command: /bogus"));
        assert!(repl.widget().messages().is_empty());
    }
}
