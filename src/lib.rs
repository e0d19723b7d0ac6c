//! # stockdesk
//!
//! Client-side core of the stockdesk front end, for native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — `Symbol`, wire types, errors, route table (always available, WASM-safe)
//! 2. **HTTP API** — `StockHttp`, one request per endpoint, no retries
//! 3. **High-Level Client** — `StockClient` with `stocks()` / `admin()` sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockdesk::prelude::*;
//!
//! let client = StockClient::builder()
//!     .base_url("http://localhost:3000")
//!     .build()?;
//!
//! let nvda = client.stocks().get("NVDA").await?;
//! client.admin().update_subreddit("NVDA", Some("wallstreetbets")).await?;
//!
//! let route = Router::new().resolve("/stock/NVDA");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Front-end route table.
pub mod router;

/// Unified SDK error types.
pub mod error;

/// Base URL defaults and environment lookup.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StockClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::Symbol;

    // Domain types
    pub use crate::domain::admin::{AdminStock, AdminStocksResponse, UpdateSubredditRequest};
    pub use crate::domain::stock::{Fundamentals, StockData, StockSummary};

    // Routing
    pub use crate::router::{RouteEntry, RouteMatch, RouteParams, Router, View, ROUTES};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AdminClient, StockClient, StockClientBuilder, StocksClient};
}
