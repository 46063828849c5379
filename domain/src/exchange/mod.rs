//! Per-conversation exchange state machine
//!
//! ```text
//! Idle ──text change──> Composing ──send──> Sent(n) ──last reply──> Idle
//! ```
//!
//! Several sends may overlap; `Sent` carries the number of replies still
//! outstanding and is left only when that number drops back to zero.

/// Observable phase of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangePhase {
    Idle,
    Composing,
    Sent { pending: usize },
}

impl ExchangePhase {
    pub fn label(&self) -> String {
        match self {
            ExchangePhase::Idle => "idle".to_string(),
            ExchangePhase::Composing => "composing".to_string(),
            ExchangePhase::Sent { pending: 1 } => "waiting for reply".to_string(),
            ExchangePhase::Sent { pending } => format!("waiting for {} replies", pending),
        }
    }
}

/// Raw counters behind [`ExchangePhase`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeState {
    composing: bool,
    pending_replies: usize,
}

impl ExchangeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_changed(&mut self) {
        self.composing = true;
    }

    pub fn sent(&mut self) {
        self.composing = false;
        self.pending_replies += 1;
    }

    /// A reply landed or was discarded after teardown.
    pub fn reply_settled(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn phase(&self) -> ExchangePhase {
        if self.pending_replies > 0 {
            ExchangePhase::Sent {
                pending: self.pending_replies,
            }
        } else if self.composing {
            ExchangePhase::Composing
        } else {
            ExchangePhase::Idle
        }
    }
}
