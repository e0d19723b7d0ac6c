//! Stock domain — stock data, search and fundamentals.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{Fundamentals, StockData, StockSummary};
