//! Low-level HTTP client — `StockHttp`.
//!
//! One method per API endpoint. Returns wire types; input validation happens
//! in the sub-clients that wrap this. Every call issues exactly one request:
//! no retries, no caching.

use crate::domain::admin::{AdminStock, AdminStocksResponse, UpdateSubredditRequest};
use crate::domain::stock::{Fundamentals, StockData, StockSummary};
use crate::error::HttpError;
use crate::shared::Symbol;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the stockdesk REST API.
#[derive(Debug, Clone)]
pub struct StockHttp {
    base_url: String,
    client: Client,
}

impl StockHttp {
    /// Build a client for `base_url`. `timeout` applies per request on native
    /// targets; on WASM the browser's fetch decides.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        headers: HeaderMap,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Stocks ───────────────────────────────────────────────────────────

    pub async fn get_stock(&self, symbol: &Symbol) -> Result<StockData, HttpError> {
        let url = self.stock_url(symbol);
        self.get(&url, format!("Failed to fetch data for {}", symbol))
            .await
    }

    pub async fn search_stocks(&self, query: &str) -> Result<Vec<StockSummary>, HttpError> {
        let url = self.search_url(query);
        self.get(&url, "Failed to search stocks".to_string()).await
    }

    pub async fn get_fundamentals(&self, symbol: &Symbol) -> Result<Fundamentals, HttpError> {
        let url = format!("{}/fundamentals", self.stock_url(symbol));
        self.get(&url, format!("Failed to fetch fundamentals for {}", symbol))
            .await
    }

    // ── Admin ────────────────────────────────────────────────────────────

    pub async fn admin_get_stocks(&self) -> Result<AdminStocksResponse, HttpError> {
        let url = format!("{}/admin/stocks", self.base_url);
        self.get(&url, "Failed to fetch admin stocks".to_string())
            .await
    }

    pub async fn admin_update_subreddit(
        &self,
        symbol: &Symbol,
        body: &UpdateSubredditRequest,
    ) -> Result<AdminStock, HttpError> {
        let url = format!("{}/admin/stocks/{}", self.base_url, symbol.path_segment());
        self.patch(
            &url,
            body,
            format!("Failed to update subreddit for {}", symbol),
        )
        .await
    }

    // ── URL building ─────────────────────────────────────────────────────

    fn stock_url(&self, symbol: &Symbol) -> String {
        format!("{}/stock/{}", self.base_url, symbol.path_segment())
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/stock/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, context: String) -> Result<T, HttpError> {
        self.request(Method::GET, url, None::<&()>, context).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        context: String,
    ) -> Result<T, HttpError> {
        self.request(Method::PATCH, url, Some(body), context).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        context: String,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, "Sending request");
        match self.do_request(method, url, body, &context).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(url, error = %e, "{}", context);
                Err(e)
            }
        }
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        context: &str,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method, url);

        // `json` also sets `Content-Type: application/json`.
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|source| HttpError::Network {
            context: context.to_string(),
            source,
        })?;
        let status = resp.status();

        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                context: context.to_string(),
                status: status.as_u16(),
                body: body_text,
            });
        }

        let bytes = resp.bytes().await.map_err(|source| HttpError::Network {
            context: context.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| HttpError::Decode {
            context: context.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(base: &str) -> StockHttp {
        StockHttp::new(base, None, HeaderMap::new()).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(http("http://localhost:3000/").base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_stock_url() {
        let h = http("http://localhost:3000");
        assert_eq!(
            h.stock_url(&Symbol::from("NVDA")),
            "http://localhost:3000/stock/NVDA"
        );
    }

    #[test]
    fn test_search_url_percent_encodes_query() {
        let h = http("http://localhost:3000");
        assert_eq!(
            h.search_url("AA PL"),
            "http://localhost:3000/stock/search?q=AA%20PL"
        );
        assert_eq!(
            h.search_url("a&b=c?#"),
            "http://localhost:3000/stock/search?q=a%26b%3Dc%3F%23"
        );
        assert_eq!(h.search_url(""), "http://localhost:3000/stock/search?q=");
    }
}
