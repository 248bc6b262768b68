use crate::request::FetchRequest;
use plot_core::{PlotError, RawMetrics, Result};
use tracing::debug;

/// Anything that can answer a [`FetchRequest`] with a raw metrics response.
///
/// The HTTP client is the production source; tests plug in canned data.
#[allow(async_fn_in_trait)]
pub trait MetricSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<RawMetrics>;
}

/// HTTP client for the metrics service.
///
/// No retries: a transport failure or non-success status fails the fetch.
#[derive(Debug, Clone)]
pub struct MetricsClient {
    http:     reqwest::Client,
    base_url: String,
}

impl MetricsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http:     reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies, TLS).
    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MetricSource for MetricsClient {
    async fn fetch(&self, request: &FetchRequest) -> Result<RawMetrics> {
        let url = request.url(&self.base_url);
        debug!(%url, query = ?request.query(), "fetching metrics");

        let response = self
            .http
            .get(&url)
            .query(&request.query())
            .send()
            .await
            .map_err(|e| PlotError::Http(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlotError::Http(format!("GET {url}: status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlotError::Http(format!("GET {url}: read body: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| PlotError::Parse(format!("metrics response from {url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response and hand back the request line it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();

            request.lines().next().unwrap_or_default().to_string()
        });

        (base, handle)
    }

    fn client(base: String) -> MetricsClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        MetricsClient::with_http(base, http)
    }

    #[tokio::test]
    async fn fetch_decodes_metrics_and_sends_query() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"cpu_percent":[{"x":1000,"y":10.5}],"ram_used":[]}"#,
        )
        .await;

        let client = client(base);
        let raw = client
            .fetch(&FetchRequest::range("timestamp_metrics", 1000, 2000, Some(60)))
            .await
            .unwrap();

        assert_eq!(raw["cpu_percent"][0].x, 1000);
        assert_eq!(raw["cpu_percent"][0].y, 10.5);
        assert!(raw["ram_used"].is_empty());

        let request_line = server.await.unwrap();
        assert!(
            request_line.starts_with("GET /api/timestamp_metrics?start=1000&stop=2000&step=60 "),
            "{request_line}"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let (base, server) = serve_once("500 Internal Server Error", "").await;

        let client = client(base);
        let err = client.fetch(&FetchRequest::recent("hour_metrics")).await.unwrap_err();
        assert!(matches!(err, PlotError::Http(_)), "{err}");

        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let (base, server) = serve_once("200 OK", "not json").await;

        let client = client(base);
        let err = client.fetch(&FetchRequest::recent("hour_metrics")).await.unwrap_err();
        assert!(matches!(err, PlotError::Parse(_)), "{err}");

        server.await.unwrap();
    }
}
