//! Infrastructure layer for custom-chatbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP reply transport, configuration
//! file loading and the JSONL message transcript.

pub mod config;
pub mod logging;
pub mod transport;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileAppConfig, FileConfig, FileOutputConfig, FileTranscriptConfig,
    FileTuiConfig, FileWidgetConfig, Severity,
};
pub use logging::JsonlTranscriptLogger;
pub use transport::HttpReplyTransport;
