//! # mru-db
//!
//! Data access for MRU Exchange over the hosted backend's HTTP APIs.
//!
//! - [`query`]: fluent request description (filters, ordering, single-row)
//! - [`http`] and [`adapter`]: raw response capture and the one place a
//!   response becomes a [`mru_core::MarketResult`]
//! - [`repos`]: per-entity operations as `impl MarketClient` blocks
//! - [`builders`]: validated, fluent builders with a terminal write or read
//! - [`realtime`]: channel descriptors and the insert-feed callback contract
//!
//! The client never caches rows; every read is a fresh round trip.

pub mod adapter;
pub mod builders;
mod client;
pub mod http;
pub mod query;
pub mod realtime;
pub mod repos;

pub use adapter::RawResponse;
pub use client::MarketClient;
pub use query::{Order, Query};
