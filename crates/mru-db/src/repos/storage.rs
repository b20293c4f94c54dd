//! Storage repository: object uploads and public URLs.

use mru_core::entities::Product;
use mru_core::{MarketError, MarketResult};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::MarketClient;
use crate::adapter;
use crate::http::read_response;

/// Object key returned after an upload (`{bucket}/{path}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredObject {
    #[serde(rename = "Key")]
    pub key: String,
}

/// Percent-encode each segment of an object path, keeping the separators.
#[must_use]
pub fn object_path(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Content type for an image file name, by extension.
#[must_use]
pub fn image_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

impl MarketClient {
    /// Upload `bytes` to `bucket/path`. With `upsert` an existing object is
    /// replaced; without it the backend rejects the duplicate.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> MarketResult<StoredObject> {
        let url = self.url(&format!(
            "storage/v1/object/{}/{}",
            urlencoding::encode(bucket),
            object_path(path)
        ));
        tracing::debug!(bucket, path, size = bytes.len(), upsert, "storage upload");
        let response = self
            .authorize(self.http().post(url))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", upsert.to_string())
            .body(bytes)
            .send()
            .await
            .map_err(|e| MarketError::Transport(e.to_string()))?;
        adapter::adapt(read_response(response).await?, "storage object")
    }

    /// Public URL of an object in a public bucket. No request is made.
    #[must_use]
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.url(&format!(
            "storage/v1/object/public/{}/{}",
            urlencoding::encode(bucket),
            object_path(path)
        ))
    }

    /// Public URLs for a product's images, in stored order.
    #[must_use]
    pub fn product_image_urls(&self, product: &Product) -> Vec<String> {
        let bucket = &self.storage().product_bucket;
        product
            .image_paths()
            .iter()
            .map(|path| self.public_url(bucket, path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use mru_config::{BackendConfig, StorageConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> MarketClient {
        let backend = BackendConfig {
            url: "https://abcd.supabase.co".into(),
            anon_key: "anon".into(),
            ..BackendConfig::default()
        };
        MarketClient::new(&backend, &StorageConfig::default()).expect("client builds")
    }

    #[test]
    fn public_url_encodes_segments_only() {
        assert_eq!(
            client().public_url("product-images", "seller 1/desk lamp.png"),
            "https://abcd.supabase.co/storage/v1/object/public/product-images/seller%201/desk%20lamp.png"
        );
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(image_content_type("me.JPG"), "image/jpeg");
        assert_eq!(image_content_type("me.webp"), "image/webp");
        assert_eq!(image_content_type("me"), "application/octet-stream");
    }
}
