//! Logging infrastructure — message transcripts.
//!
//! Provides [`JsonlTranscriptLogger`], a JSONL file writer that implements
//! the [`MessageObserver`](chatbot_application::MessageObserver) port.

mod jsonl_transcript;

pub use jsonl_transcript::JsonlTranscriptLogger;
