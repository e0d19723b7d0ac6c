//! Wire types for stock data, search and fundamentals responses.
//!
//! The backend owns these schemas. Known fields are lifted into typed slots
//! when they have the expected shape; everything else, including known fields
//! with an unexpected shape, is kept verbatim in `extra`.

use crate::shared::serde_util::{put, take, take_number};
use crate::shared::Symbol;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from `GET /stock/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct StockData {
    pub symbol: Option<Symbol>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub official_subreddit: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for StockData {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            symbol: take(&mut map, "symbol"),
            name: take(&mut map, "name"),
            price: take_number(&mut map, "price"),
            change: take_number(&mut map, "change"),
            change_percent: take_number(&mut map, "changePercent"),
            official_subreddit: take(&mut map, "officialSubreddit"),
            extra: map,
        }
    }
}

impl From<StockData> for Map<String, Value> {
    fn from(data: StockData) -> Self {
        let mut map = data.extra;
        put(&mut map, "symbol", data.symbol);
        put(&mut map, "name", data.name);
        put(&mut map, "price", data.price);
        put(&mut map, "change", data.change);
        put(&mut map, "changePercent", data.change_percent);
        put(&mut map, "officialSubreddit", data.official_subreddit);
        map
    }
}

/// One element of the `GET /stock/search` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct StockSummary {
    pub symbol: Option<Symbol>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for StockSummary {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            symbol: take(&mut map, "symbol"),
            name: take(&mut map, "name"),
            exchange: take(&mut map, "exchange"),
            extra: map,
        }
    }
}

impl From<StockSummary> for Map<String, Value> {
    fn from(summary: StockSummary) -> Self {
        let mut map = summary.extra;
        put(&mut map, "symbol", summary.symbol);
        put(&mut map, "name", summary.name);
        put(&mut map, "exchange", summary.exchange);
        map
    }
}

/// Response from `GET /stock/{symbol}/fundamentals` (P/E ratio, market cap, etc.).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Fundamentals {
    pub symbol: Option<Symbol>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub eps: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Fundamentals {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            symbol: take(&mut map, "symbol"),
            pe_ratio: take_number(&mut map, "peRatio"),
            market_cap: take_number(&mut map, "marketCap"),
            eps: take_number(&mut map, "eps"),
            dividend_yield: take_number(&mut map, "dividendYield"),
            extra: map,
        }
    }
}

impl From<Fundamentals> for Map<String, Value> {
    fn from(f: Fundamentals) -> Self {
        let mut map = f.extra;
        put(&mut map, "symbol", f.symbol);
        put(&mut map, "peRatio", f.pe_ratio);
        put(&mut map, "marketCap", f.market_cap);
        put(&mut map, "eps", f.eps);
        put(&mut map, "dividendYield", f.dividend_yield);
        map
    }
}
