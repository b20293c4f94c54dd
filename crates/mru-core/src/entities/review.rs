use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A rating left by one user on a seller, optionally for one product (`Reviews`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Review {
    pub id: i64,
    pub created_by_id: String,
    pub created_on_id: String,
    pub product_id: Option<i64>,
    pub rating: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate row produced by the backend `avg()` select.
///
/// `rating` is `None` when no reviews matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AverageRating {
    pub rating: Option<f64>,
}
