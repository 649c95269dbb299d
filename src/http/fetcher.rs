use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use std::sync::Mutex;

use crate::http::headers::spoofed_headers;
use crate::http::url::lookup_url;

/// Retrieves the raw lookup page for an identifier
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<Vec<u8>>;
}

/// Fetcher backed by a reqwest client and an injected random source
pub struct HttpFetcher<R> {
    client: Client,
    base_url: String,
    rng: Mutex<R>,
}

impl<R: Rng + Send> HttpFetcher<R> {
    pub fn new(client: Client, base_url: impl Into<String>, rng: R) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            rng: Mutex::new(rng),
        }
    }

    /// Build the GET request for `id` without sending it
    pub fn build_request(&self, id: &str) -> Result<reqwest::Request> {
        let url = lookup_url(&self.base_url, id)?;
        let headers = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| anyhow::anyhow!("random source lock poisoned"))?;
            spoofed_headers(&mut *rng)
        };
        Ok(self.client.get(url).headers(headers).build()?)
    }
}

#[async_trait]
impl<R: Rng + Send> Fetch for HttpFetcher<R> {
    async fn fetch(&self, id: &str) -> Result<Vec<u8>> {
        let request = self.build_request(id)?;
        let resp = self
            .client
            .execute(request)
            .await
            .with_context(|| format!("request for {} failed", id))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("failed to fetch IP info for {}: {}", id, status);
        }

        let body = resp
            .bytes()
            .await
            .with_context(|| format!("failed to read response body for {}", id))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::USER_AGENTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reqwest::header::USER_AGENT;

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    fn fetcher(seed: u64) -> HttpFetcher<StdRng> {
        HttpFetcher::new(
            Client::new(),
            "https://ipinfo.io/",
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_build_request() {
        let req = fetcher(3).build_request("10.0.0.0/24").unwrap();
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(req.url().as_str(), "https://ipinfo.io/ips/10.0.0.0/24");
        let agent = req.headers().get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(USER_AGENTS.contains(&agent));
    }

    #[test]
    fn test_build_request_same_seed_same_agent() {
        let a = fetcher(9).build_request("1.1.1.1").unwrap();
        let b = fetcher(9).build_request("1.1.1.1").unwrap();
        assert_eq!(a.headers().get(USER_AGENT), b.headers().get(USER_AGENT));
    }

    /// Serve a single canned HTTP response and return the request head it saw
    async fn serve_once(
        response: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });
        (base_url, handle)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let (base_url, handle) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<html></html>",
        )
        .await;
        let fetcher = HttpFetcher::new(local_client(), base_url, StdRng::seed_from_u64(5));

        let body = fetcher.fetch("10.0.0.0/24").await.unwrap();
        assert_eq!(body, b"<html></html>");

        let head = handle.await.unwrap();
        assert!(head.starts_with("GET /ips/10.0.0.0/24 HTTP/1.1"));
        assert!(head.to_lowercase().contains("user-agent: mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let (base_url, handle) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let fetcher = HttpFetcher::new(local_client(), base_url, StdRng::seed_from_u64(5));

        let err = fetcher.fetch("1.1.1.1").await.unwrap_err();
        assert!(err.to_string().contains("failed to fetch IP info for 1.1.1.1"));
        assert!(err.to_string().contains("404"));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_connection_error() {
        // Port 9 on localhost is not expected to accept HTTP.
        let fetcher = HttpFetcher::new(
            local_client(),
            "http://127.0.0.1:9/",
            StdRng::seed_from_u64(0),
        );
        let err = fetcher.fetch("1.1.1.1").await.unwrap_err();
        assert!(err.to_string().contains("request for 1.1.1.1 failed"));
    }
}
