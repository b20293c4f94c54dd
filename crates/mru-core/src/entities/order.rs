use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A purchase record (`Product_Order`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProductOrder {
    pub id: i64,
    pub ordered_by_id: String,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}
