//! Message domain.
//!
//! - [`entities::Message`] — one immutable chat message
//! - [`entities::Role`] — who sent it
//! - [`id::MessageIdGenerator`] — collision-free, monotonically increasing ids

pub mod entities;
pub mod id;
