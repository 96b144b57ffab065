//! Quote endpoint transport.

use async_trait::async_trait;
use tf_core::error::QuoteError;
use tf_core::types::QuoteRequest;
use tf_page::{QuoteSource, RawReply};
use tracing::debug;

use crate::client::WebClient;

/// Posts quote requests as JSON to the configured quote path.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: WebClient,
}

impl HttpQuoteSource {
    pub fn new(client: WebClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self, request: &QuoteRequest) -> Result<RawReply, QuoteError> {
        let url = self
            .client
            .url(&self.client.config().quote_path)
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let resp = self
            .client
            .http()
            .post(url)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(request)
            .send()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body =
            resp.text().await.map_err(|e| QuoteError::Transport(format!("reading body: {e}")))?;
        debug!("[http] quote {} -> {status} ({} bytes)", request.symbol, body.len());
        Ok(RawReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use tf_core::config::ServerConfig;
    use tf_core::types::Symbol;

    use super::*;
    use crate::test_server::serve_once;

    fn source(base_url: &str) -> HttpQuoteSource {
        let mut cfg = ServerConfig::with_base_url(base_url);
        cfg.extra_headers.insert("Cookie".into(), "session=abc".into());
        HttpQuoteSource::new(WebClient::new(cfg).unwrap())
    }

    #[tokio::test]
    async fn posts_json_and_returns_reply() {
        let (base, server) = serve_once("200 OK", r#"{"price":"172.35"}"#.to_string()).await;

        let request = QuoteRequest { symbol: Symbol::new("AAPL").unwrap() };
        let reply = source(&base).fetch(&request).await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, r#"{"price":"172.35"}"#);

        let raw = server.await.unwrap();
        let lower = raw.to_ascii_lowercase();
        assert!(raw.starts_with("POST /quote HTTP/1.1"));
        assert!(lower.contains("content-type: application/json"));
        assert!(lower.contains("x-requested-with: xmlhttprequest"));
        assert!(lower.contains("cookie: session=abc"));
        assert!(raw.ends_with(r#"{"symbol":"AAPL"}"#));
    }

    #[tokio::test]
    async fn error_status_is_a_reply() {
        let body = r#"{"error":"invalid symbol"}"#.to_string();
        let (base, server) = serve_once("400 Bad Request", body).await;

        let request = QuoteRequest { symbol: Symbol::new("ZZZZ").unwrap() };
        let reply = source(&base).fetch(&request).await.unwrap();
        assert_eq!(reply.status, 400);
        assert!(!reply.is_success());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let request = QuoteRequest { symbol: Symbol::new("AAPL").unwrap() };
        let err = source(&format!("http://{addr}")).fetch(&request).await.unwrap_err();
        assert!(matches!(err, QuoteError::Transport(_)));
    }
}
