//! Chat widget assembly
//!
//! Wires a store, a writer and a composer together. The two variants
//! differ only in where state lives and how replies are produced:
//!
//! - [`ChatWidget::standalone`] owns a [`LocalConversationStore`] and picks
//!   echo or remote replies from [`WidgetOptions::api_url`];
//! - [`ChatWidget::connected`] binds to a shared [`ChatStore`] and always
//!   echoes locally.

use super::composer::Composer;
use super::writer::ConversationWriter;
use crate::config::{ReplyMode, WidgetOptions};
use crate::ports::conversation_store::ConversationStore;
use crate::ports::message_observer::MessageObserver;
use crate::ports::reply_transport::ReplyTransport;
use crate::reply::{ReplyProvider, echo::EchoReplyProvider};
use crate::store::{local::LocalConversationStore, shared::ChatStore};
use chatbot_domain::{ExchangePhase, Message};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// A conversation store plus the composer that writes to it
pub struct ChatWidget {
    store: Arc<dyn ConversationStore>,
    composer: Composer,
}

impl ChatWidget {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        provider: Arc<dyn ReplyProvider>,
        on_message: Option<Arc<dyn MessageObserver>>,
    ) -> Self {
        let mut writer = ConversationWriter::new(store.clone());
        if let Some(observer) = on_message {
            writer = writer.with_observer(observer);
        }
        info!("Chat widget ready ({} replies)", provider.mode());
        Self {
            store,
            composer: Composer::new(Arc::new(writer), provider),
        }
    }

    /// Widget with its own local state.
    pub fn standalone(options: &WidgetOptions, transport: Arc<dyn ReplyTransport>) -> Self {
        Self::new(
            Arc::new(LocalConversationStore::new()),
            options.reply_provider(transport),
            options.on_message.clone(),
        )
    }

    /// Widget bound to a shared store; replies are always local echoes.
    pub fn connected(store: Arc<ChatStore>, options: &WidgetOptions) -> Self {
        Self::new(
            store,
            Arc::new(EchoReplyProvider::new(options.echo_delay)),
            options.on_message.clone(),
        )
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    pub fn messages(&self) -> Vec<Message> {
        self.store.messages()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn phase(&self) -> ExchangePhase {
        self.composer.phase()
    }

    pub fn reply_mode(&self) -> ReplyMode {
        self.composer.provider().mode()
    }
}
