//! Console output formatting for line mode

pub mod console;
