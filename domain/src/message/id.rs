//! Message identifiers

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique, orderable message identifier.
///
/// Values are millisecond-timestamp-like but strictly increasing per
/// generator, so two messages created in the same clock tick still get
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source.
///
/// Each call returns `max(now_ms, last + 1)`: ids track the wall clock
/// while it moves forward and fall back to a counter when calls arrive
/// faster than the clock ticks (or the clock steps backwards).
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    last: AtomicU64,
}

impl MessageIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose first id is at least `floor + 1`.
    pub fn starting_after(floor: u64) -> Self {
        Self {
            last: AtomicU64::new(floor),
        }
    }

    pub fn next_id(&self) -> MessageId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        MessageId(now.max(previous.saturating_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase_within_one_tick() {
        let ids = MessageIdGenerator::new();
        let generated: Vec<MessageId> = (0..1_000).map(|_| ids.next_id()).collect();
        assert!(generated.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_follow_counter_when_floor_is_ahead_of_clock() {
        let ids = MessageIdGenerator::starting_after(u64::MAX - 10);
        assert_eq!(ids.next_id(), MessageId::new(u64::MAX - 9));
        assert_eq!(ids.next_id(), MessageId::new(u64::MAX - 8));
    }

    #[test]
    fn test_ids_are_timestamp_like() {
        let before = chrono::Utc::now().timestamp_millis() as u64;
        let id = MessageIdGenerator::new().next_id();
        assert!(id.get() >= before);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let ids = Arc::new(MessageIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 1_000);
    }
}
