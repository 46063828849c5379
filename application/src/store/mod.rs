//! Conversation store implementations
//!
//! - [`local::LocalConversationStore`] — state owned by a single widget
//! - [`shared::ChatStore`] — reducer-driven store that several components
//!   can share (the connected app)
//!
//! Both satisfy [`ConversationStore`](crate::ports::conversation_store::ConversationStore)
//! and are injected as `Arc<dyn ConversationStore>`.

pub mod local;
pub mod shared;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a store mutex, recovering the data if a previous holder panicked.
///
/// Store contents are plain values that are always left consistent, so a
/// poisoned lock carries no broken invariant.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
