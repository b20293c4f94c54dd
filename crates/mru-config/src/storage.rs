//! Storage bucket names.

use serde::{Deserialize, Serialize};

fn default_product_bucket() -> String {
    "product-images".to_string()
}

fn default_profile_bucket() -> String {
    "profile-pictures".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Public bucket holding product photos.
    #[serde(default = "default_product_bucket")]
    pub product_bucket: String,

    /// Public bucket holding profile pictures.
    #[serde(default = "default_profile_bucket")]
    pub profile_bucket: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            product_bucket: default_product_bucket(),
            profile_bucket: default_profile_bucket(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.product_bucket, "product-images");
        assert_eq!(config.profile_bucket, "profile-pictures");
    }
}
