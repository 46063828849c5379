//! Reply endpoint transports.

mod http;

pub use http::HttpReplyTransport;
