//! High-level client — `StockClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::admin::client::Admin;
use crate::domain::stock::client::Stocks;
use crate::error::SdkError;
use crate::http::StockHttp;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::stock::client::Stocks as StocksClient;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the stockdesk SDK.
///
/// Provides nested sub-client accessors: `client.stocks()`, `client.admin()`.
/// Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct StockClient {
    pub(crate) http: StockHttp,
}

impl StockClient {
    pub fn builder() -> StockClientBuilder {
        StockClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn stocks(&self) -> Stocks<'_> {
        Stocks { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct StockClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl Default for StockClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            default_headers: Vec::new(),
        }
    }
}

impl StockClientBuilder {
    /// Builder whose base URL comes from `STOCKDESK_API_URL`, or the local default.
    pub fn from_env() -> Self {
        Self::default().base_url(&crate::network::api_url_from_env())
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Leave requests unbounded; only the transport's own limits apply.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<StockClient, SdkError> {
        let base_url = self.base_url.trim();
        reqwest::Url::parse(base_url)
            .map_err(|e| SdkError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                SdkError::Config(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SdkError::Config(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let http = StockHttp::new(base_url, self.timeout, headers)
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(StockClient { http })
    }
}
