use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-user anchor for bookmarked products (`Shopping_Cart`).
///
/// A user has at most one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Bookmarker {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// A bookmarked product (`Shopping_Cart_Products`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BookmarkedProduct {
    pub shopping_cart_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}
