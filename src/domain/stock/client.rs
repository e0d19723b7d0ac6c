//! Stocks sub-client — stock data, search, fundamentals.

use crate::client::StockClient;
use crate::domain::stock::{Fundamentals, StockData, StockSummary};
use crate::error::SdkError;
use crate::shared::Symbol;

/// Sub-client for stock operations.
pub struct Stocks<'a> {
    pub(crate) client: &'a StockClient,
}

impl<'a> Stocks<'a> {
    /// `GET /stock/{symbol}`.
    pub async fn get(&self, symbol: impl Into<Symbol>) -> Result<StockData, SdkError> {
        let symbol = require_symbol(symbol.into())?;
        Ok(self.client.http.get_stock(&symbol).await?)
    }

    /// `GET /stock/search?q={query}`. An empty query is sent as-is.
    pub async fn search(&self, query: &str) -> Result<Vec<StockSummary>, SdkError> {
        Ok(self.client.http.search_stocks(query).await?)
    }

    /// `GET /stock/{symbol}/fundamentals`.
    pub async fn fundamentals(&self, symbol: impl Into<Symbol>) -> Result<Fundamentals, SdkError> {
        let symbol = require_symbol(symbol.into())?;
        Ok(self.client.http.get_fundamentals(&symbol).await?)
    }
}

pub(crate) fn require_symbol(symbol: Symbol) -> Result<Symbol, SdkError> {
    if symbol.is_blank() {
        tracing::warn!("Rejected blank stock symbol");
        return Err(SdkError::Validation("Stock symbol must not be empty".to_string()));
    }
    Ok(symbol)
}
