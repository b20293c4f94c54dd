use mru_core::drafts::ProductDraft;
use mru_core::entities::RowId;
use mru_core::enums::{Field, Table};
use mru_core::{MarketResult, ValidationError, validate};

use crate::MarketClient;
use crate::query::Query;

/// Accumulates a new listing, then inserts it with [`submit`](Self::submit).
#[derive(Debug)]
pub struct ProductBuilder<'a> {
    client: &'a MarketClient,
    draft: ProductDraft,
}

impl<'a> ProductBuilder<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self {
            client,
            draft: ProductDraft::default(),
        }
    }

    pub fn seller(&mut self, supabase_id: &str) -> Result<&mut Self, ValidationError> {
        validate::required_id(
            &mut self.draft.seller,
            supabase_id,
            Field::Seller,
            "Missing product seller",
        )?;
        Ok(self)
    }

    pub fn title(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::title(&mut self.draft.title, raw)?;
        Ok(self)
    }

    pub fn description(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::description(&mut self.draft.description, raw, "Product")?;
        Ok(self)
    }

    /// Image object keys within the product bucket.
    pub fn image<S: AsRef<str>>(&mut self, paths: &[S]) -> Result<&mut Self, ValidationError> {
        validate::images(&mut self.draft.image, paths)?;
        Ok(self)
    }

    pub fn price(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::price(&mut self.draft.price, raw)?;
        Ok(self)
    }

    pub fn price_value(&mut self, value: f64) -> Result<&mut Self, ValidationError> {
        validate::price_value(&mut self.draft.price, value)?;
        Ok(self)
    }

    pub fn stock(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::stock(&mut self.draft.stock, raw)?;
        Ok(self)
    }

    pub fn stock_value(&mut self, value: i64) -> Result<&mut Self, ValidationError> {
        validate::stock_value(&mut self.draft.stock, value)?;
        Ok(self)
    }

    #[must_use]
    pub const fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Insert the listing and return its id.
    ///
    /// # Errors
    ///
    /// Returns a validation error without sending anything if a required
    /// field was never set successfully.
    pub async fn submit(&self) -> MarketResult<RowId> {
        self.draft.ensure_complete()?;
        tracing::info!(title = ?self.draft.title, "listing product");
        self.client
            .fetch(
                Query::insert(Table::ProductInformation, &self.draft)?
                    .columns("id")
                    .single(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use mru_config::{BackendConfig, StorageConfig};

    use super::*;

    fn client() -> MarketClient {
        let backend = BackendConfig {
            url: "http://localhost:54321".into(),
            anon_key: "anon".into(),
            ..BackendConfig::default()
        };
        MarketClient::new(&backend, &StorageConfig::default()).expect("client builds")
    }

    #[test]
    fn chain_stops_at_first_invalid_field() {
        let client = client();
        let mut builder = ProductBuilder::new(&client);
        let result = builder
            .seller("uid-1")
            .and_then(|b| b.title("Desk Lamp"))
            .and_then(|b| b.price("-5"))
            .and_then(|b| b.stock("3"));
        assert_eq!(result.expect_err("negative price").field, Field::Price);
        assert_eq!(builder.draft().title.as_deref(), Some("Desk Lamp"));
        assert_eq!(builder.draft().price, None);
        assert_eq!(builder.draft().stock, None);
    }

    #[tokio::test]
    async fn submit_without_price_fails_before_io() {
        let client = client();
        let mut builder = ProductBuilder::new(&client);
        builder
            .seller("uid-1")
            .and_then(|b| b.title("Desk Lamp"))
            .and_then(|b| b.description("Bright and adjustable"))
            .and_then(|b| b.stock_value(1))
            .expect("valid fields");
        let error = builder.submit().await.expect_err("price missing");
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Product price is not specified");
    }
}
