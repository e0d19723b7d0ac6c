//! Wire types for the admin subreddit-assignment endpoints.

use crate::shared::serde_util::{put, take};
use crate::shared::Symbol;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stock as seen by the admin screen; also the `PATCH` result.
///
/// Fields are lifted leniently: a response without `symbol`, or one that wraps
/// the stock in an envelope, still decodes and keeps every field in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AdminStock {
    pub symbol: Option<Symbol>,
    /// `None` when no subreddit is assigned (absent or `null` on the wire).
    pub official_subreddit: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for AdminStock {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            symbol: take(&mut map, "symbol"),
            official_subreddit: take(&mut map, "officialSubreddit"),
            extra: map,
        }
    }
}

impl From<AdminStock> for Map<String, Value> {
    fn from(stock: AdminStock) -> Self {
        let mut map = stock.extra;
        put(&mut map, "symbol", stock.symbol);
        // Unassigned is written as an explicit null.
        map.insert(
            "officialSubreddit".to_string(),
            stock.official_subreddit.map_or(Value::Null, Value::String),
        );
        map
    }
}

/// Response from `GET /admin/stocks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStocksResponse {
    pub stocks: Vec<AdminStock>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `PATCH /admin/stocks/{symbol}`.
///
/// `official_subreddit` is always serialized; `None` becomes an explicit
/// `null`, which clears the assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubredditRequest {
    pub official_subreddit: Option<String>,
}

impl UpdateSubredditRequest {
    pub fn new(official_subreddit: Option<&str>) -> Self {
        Self {
            official_subreddit: official_subreddit.map(str::to_string),
        }
    }
}
