//! Admin domain — official subreddit assignment per stock.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{AdminStock, AdminStocksResponse, UpdateSubredditRequest};
