//! Plain line-mode chat
//!
//! Reads messages from stdin and prints the conversation to stdout, for
//! terminals where the full-screen window is unwanted.

pub mod repl;

pub use repl::ChatRepl;
