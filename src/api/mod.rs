//! HTTP client for the honeypot detection API.
//!
//! Wraps a [`reqwest::Client`] with the three endpoint calls the dashboard
//! makes: the health probe, the stats poll, and the analyze request. All
//! failures map into [`ApiError`]; none of them are fatal to the session.
//! The caller decides whether to retry (the poller does so implicitly on the
//! next interval, the console surfaces the error and waits for the user).

mod types;

pub use types::{AnalysisResult, AnalyzeRequest, StatsSnapshot};

use std::time::Duration;

use thiserror::Error;

/// Default analysis endpoint root.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout.
///
/// Timeout expiry is reported as [`ApiError::Timeout`] and handled like any
/// other transport failure (skipped poll cycle, failed submission).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from a single API call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Reachability of the honeypot server, set by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ConnectionStatus {
    /// Returns the display label for the header badge.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "Connecting...",
            ConnectionStatus::Online => "Server Online",
            ConnectionStatus::Offline => "Server Offline",
        }
    }
}

/// Client for the honeypot API.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use scamwatch::api::ApiClient;
///
/// # tokio_test::block_on(async {
/// let client = ApiClient::new("http://127.0.0.1:8000", std::time::Duration::from_secs(10))?;
/// let status = client.probe().await;
/// println!("{}", status.label());
/// # Ok::<_, scamwatch::api::ApiError>(())
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for the given base URL with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// The configured endpoint root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Network(e.to_string())
        }
    }

    /// One-shot reachability check against `GET /health`.
    ///
    /// Any 2xx response means online; a non-2xx response or any transport
    /// failure means offline. This never returns an error: unreachability
    /// is a status value, not a fault.
    pub async fn probe(&self) -> ConnectionStatus {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) if response.status().is_success() => ConnectionStatus::Online,
            Ok(_) | Err(_) => ConnectionStatus::Offline,
        }
    }

    /// Fetch the aggregate counters from `GET /stats`.
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let response = self
            .http
            .get(self.url("/stats"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Submit one message for analysis via `POST /analyze`.
    pub async fn analyze(&self, message: &str) -> Result<AnalysisResult, ApiError> {
        let body = AnalyzeRequest {
            message: message.to_string(),
        };

        let response = self
            .http
            .post(self.url("/analyze"))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:8000/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/stats"), "http://localhost:8000/stats");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Unknown);
        assert_eq!(ConnectionStatus::Online.label(), "Server Online");
        assert_eq!(ConnectionStatus::Offline.label(), "Server Offline");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status(500);
        assert_eq!(err.to_string(), "HTTP error: 500");

        let err = ApiError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().contains("timed out"));
    }
}
