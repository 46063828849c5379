//! TUI rendering — all rendering logic extracted from TuiApp.

use super::state::TuiState;
use super::widgets::{
    MainLayout, chat_window::ChatWindowWidget, header::HeaderWidget, input::InputWidget,
    status_bar::StatusBarWidget,
};

/// Render every widget of the chat window for one frame.
pub(super) fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(ChatWindowWidget::new(state), layout.conversation);
    frame.render_widget(InputWidget::new(state), layout.input);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}
