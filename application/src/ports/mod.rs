//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that stores, observers and infrastructure
//! adapters must implement.

pub mod conversation_store;
pub mod message_observer;
pub mod reply_transport;
