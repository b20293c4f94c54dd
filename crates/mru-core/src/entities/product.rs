use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image container stored in the `image` JSON column.
///
/// Paths are object keys inside the product image bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProductImages {
    pub images: Vec<String>,
}

/// A listed (or delisted) product (`Product_Information`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Product {
    pub id: i64,
    /// Seller's auth subject id.
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock_count: i64,
    #[serde(default)]
    pub image: Option<ProductImages>,
    #[serde(rename = "isListed")]
    pub is_listed: bool,
    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Image object keys, empty when the product has none.
    #[must_use]
    pub fn image_paths(&self) -> &[String] {
        self.image
            .as_ref()
            .map(|image| image.images.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_count > 0
    }
}
