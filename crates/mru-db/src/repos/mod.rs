//! Repository modules implementing operations for every marketplace entity.
//!
//! Each module adds methods to `MarketClient` via `impl MarketClient` blocks.
//! Methods take only the identifying columns they need and end by adapting
//! the raw response.

pub mod bookmarking;
pub mod catalogue;
pub mod interaction;
pub mod listing;
pub mod messaging;
pub mod orders;
pub mod profile;
pub mod reporting;
pub mod review;
pub mod storage;
