//! Port for reacting to appended messages (the widget's `onMessage` hook).

use chatbot_domain::Message;

/// Callback invoked after every message appended to a conversation.
///
/// Called synchronously while the conversation writer holds its lock, so
/// observers see messages in append order. An observer must not write to
/// the conversation it observes.
pub trait MessageObserver: Send + Sync {
    fn on_message(&self, message: &Message);
}

/// No-op implementation for tests and when no hook is configured.
pub struct NoMessageObserver;

impl MessageObserver for NoMessageObserver {
    fn on_message(&self, _message: &Message) {}
}

/// Adapter turning a closure into a [`MessageObserver`].
pub struct FnMessageObserver<F>(F);

impl<F> FnMessageObserver<F>
where
    F: Fn(&Message) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> MessageObserver for FnMessageObserver<F>
where
    F: Fn(&Message) + Send + Sync,
{
    fn on_message(&self, message: &Message) {
        (self.0)(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_domain::MessageId;
    use std::sync::Mutex;

    #[test]
    fn test_fn_observer_forwards_messages() {
        let seen = Mutex::new(Vec::new());
        let observer = FnMessageObserver::new(|m: &Message| {
            seen.lock().unwrap().push(m.text().to_string());
        });

        observer.on_message(&Message::bot(MessageId::new(1), "hi"));
        NoMessageObserver.on_message(&Message::bot(MessageId::new(2), "ignored"));

        assert_eq!(*seen.lock().unwrap(), vec!["hi".to_string()]);
    }
}
