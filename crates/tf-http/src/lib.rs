//! # tf-http
//!
//! reqwest-backed transports for the page behaviors in `tf-page`.
//!
//! | Seam          | Implementation    | Request                                   |
//! |---------------|-------------------|-------------------------------------------|
//! | `QuoteSource` | [`HttpQuoteSource`] | `POST <quote_path>`, JSON `{"symbol"}`  |
//! | `FormSink`    | [`HttpFormSink`]    | `POST <action>`, form-encoded fields    |
//!
//! Both share one [`WebClient`], which carries the configured user agent and
//! extra headers (typically the session cookie of the logged-in user).

pub mod client;
pub mod form;
pub mod quote;

pub use client::WebClient;
pub use form::HttpFormSink;
pub use quote::HttpQuoteSource;

#[cfg(test)]
pub(crate) mod test_server {
    //! One-shot HTTP server on a loopback port, for transport tests.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response. Returns the base URL and a handle yielding
    /// the raw request text.
    pub async fn serve_once(
        status_line: &'static str,
        body: String,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });

        (format!("http://{addr}"), handle)
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                let content_length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
