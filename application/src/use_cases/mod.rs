//! Use cases
//!
//! - [`writer::ConversationWriter`] — the single writer of a conversation
//! - [`composer::Composer`] — pending input, send, and reply dispatch
//! - [`widget::ChatWidget`] — store + composer wired from [`WidgetOptions`](crate::WidgetOptions)

pub mod composer;
pub mod widget;
pub mod writer;
