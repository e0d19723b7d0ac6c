//! Admin sub-client — subreddit assignments.

use crate::client::StockClient;
use crate::domain::admin::{AdminStock, AdminStocksResponse, UpdateSubredditRequest};
use crate::domain::stock::client::require_symbol;
use crate::error::SdkError;
use crate::shared::Symbol;

/// Sub-client for admin operations.
pub struct Admin<'a> {
    pub(crate) client: &'a StockClient,
}

impl<'a> Admin<'a> {
    /// All stocks with their current subreddit assignment.
    pub async fn stocks(&self) -> Result<AdminStocksResponse, SdkError> {
        Ok(self.client.http.admin_get_stocks().await?)
    }

    /// Assign (`Some`) or clear (`None`) the official subreddit of `symbol`.
    pub async fn update_subreddit(
        &self,
        symbol: impl Into<Symbol>,
        official_subreddit: Option<&str>,
    ) -> Result<AdminStock, SdkError> {
        let symbol = require_symbol(symbol.into())?;
        let body = UpdateSubredditRequest::new(official_subreddit);
        Ok(self
            .client
            .http
            .admin_update_subreddit(&symbol, &body)
            .await?)
    }

    pub async fn clear_subreddit(&self, symbol: impl Into<Symbol>) -> Result<AdminStock, SdkError> {
        self.update_subreddit(symbol, None).await
    }
}
