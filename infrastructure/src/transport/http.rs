//! reqwest-backed [`ReplyTransport`]

use async_trait::async_trait;
use chatbot_application::{ReplyRequest, ReplyTransport, TransportError};
use std::time::Duration;
use tracing::{debug, warn};

/// User agent sent with every reply request
const USER_AGENT: &str = concat!("custom-chatbot/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the remote reply endpoint.
///
/// The response status is not checked: any body that parses as JSON is
/// handed back, the same way an error page with a JSON body would be read
/// by a browser `fetch().json()` chain. Bodies that are not JSON fail with
/// [`TransportError::InvalidBody`].
#[derive(Clone)]
pub struct HttpReplyTransport {
    client: reqwest::Client,
}

impl HttpReplyTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Request(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReplyTransport for HttpReplyTransport {
    async fn post_message(
        &self,
        endpoint: &str,
        request: &ReplyRequest,
    ) -> Result<serde_json::Value, TransportError> {
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Reply endpoint returned HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/chat", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(request);
        });

        (url, rx)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    fn transport() -> HttpReplyTransport {
        HttpReplyTransport::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_post_message_sends_json_and_parses_reply() {
        let (url, request_rx) = serve_once("HTTP/1.1 200 OK", r#"{"reply":"hi"}"#).await;

        let body = transport()
            .post_message(&url, &ReplyRequest::new("hello"))
            .await
            .unwrap();
        assert_eq!(body, serde_json::json!({ "reply": "hi" }));

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /chat HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"message":"hello"}"#));
    }

    #[tokio::test]
    async fn test_post_message_reads_json_from_error_status() {
        let (url, _rx) = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"error":"boom"}"#,
        )
        .await;

        let body = transport()
            .post_message(&url, &ReplyRequest::new("hello"))
            .await
            .unwrap();
        assert_eq!(body["error"], "boom");
    }

    #[tokio::test]
    async fn test_post_message_rejects_non_json_body() {
        let (url, _rx) = serve_once("HTTP/1.1 200 OK", "<html>nope</html>").await;

        let err = transport()
            .post_message(&url, &ReplyRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_post_message_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/chat", listener.local_addr().unwrap());
        drop(listener);

        let err = transport()
            .post_message(&url, &ReplyRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }

    #[tokio::test]
    async fn test_post_message_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/chat", listener.local_addr().unwrap());
        tokio::spawn(async move {
            // Accept and hold the connection without ever answering
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let transport = HttpReplyTransport::new(Duration::from_millis(100)).unwrap();
        let err = transport
            .post_message(&url, &ReplyRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Timeout));
    }
}
