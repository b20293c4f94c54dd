//! # mru-core
//!
//! Core types, field validators, and error types for MRU Exchange.
//!
//! This crate provides the foundational types shared across all MRU crates:
//! - Row structs for every marketplace table (products, chats, reviews, etc.)
//! - Table and field enums plus the interaction side resolver
//! - Draft records accumulated by builders before a write
//! - Change records for partial updates (only set columns are serialized)
//! - Field validators that write into a draft slot on success
//! - The `MarketError` taxonomy and the `MarketResult<T>` envelope
//!
//! Nothing in this crate performs I/O.

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod updates;
pub mod validate;

pub use errors::{BackendError, MarketError, MarketResult, ValidationError};
