//! # HTTP Fetcher
//!
//! `reqwest`-backed implementation of `WebFetcher`. No retries and no timeout
//! override: whatever the client defaults to applies. Any status outside 2xx,
//! including an unfollowed redirect, is a `Fetch` error.

use crate::domain::error::BotError;
use crate::domain::traits::WebFetcher;
use async_trait::async_trait;
use reqwest::redirect::Policy;

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(follow_redirects: bool) -> Result<Self, BotError> {
        let policy = if follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };
        let client = reqwest::Client::builder()
            .redirect(policy)
            .build()
            .map_err(|e| BotError::Configuration(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebFetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, BotError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Fetch(format!("{status} for {url}")));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, extra_headers: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let body = "moved";
            let response = format!(
                "HTTP/1.1 {status_line}\r\n{extra_headers}Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/top/id_genre/1/")
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let url = serve_once("200 OK", "").await;
        let fetcher = HttpFetcher::new(false).unwrap();
        assert_eq!(fetcher.get_text(&url).await.unwrap(), "moved");
    }

    #[tokio::test]
    async fn test_unfollowed_redirect_is_fetch_error() {
        let url = serve_once("302 Found", "Location: http://127.0.0.1:9/elsewhere\r\n").await;
        let fetcher = HttpFetcher::new(false).unwrap();
        let err = fetcher.get_text(&url).await.unwrap_err();
        assert!(matches!(err, BotError::Fetch(ref m) if m.contains("302")));
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_error() {
        let url = serve_once("500 Internal Server Error", "").await;
        let fetcher = HttpFetcher::new(true).unwrap();
        let err = fetcher.get_text(&url).await.unwrap_err();
        assert!(matches!(err, BotError::Fetch(ref m) if m.contains("500")));
    }
}
