//! HTTP client layer — `StockHttp`, one request per operation.

pub mod client;

pub use client::StockHttp;
