//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — serde structs matching backend requests and responses
//! - `client.rs` — sub-client with the HTTP operations for that domain

pub mod admin;
pub mod stock;
