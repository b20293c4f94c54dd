use mru_core::entities::Product;
use mru_core::enums::Table;
use mru_core::updates::ProductChange;
use mru_core::{MarketError, MarketResult, ValidationError, validate};

use crate::MarketClient;
use crate::query::Query;

/// Collects changes to one listing; [`modify`](Self::modify) writes only the
/// columns that were set.
#[derive(Debug)]
pub struct ProductModifier<'a> {
    client: &'a MarketClient,
    product_id: i64,
    change: ProductChange,
}

impl<'a> ProductModifier<'a> {
    pub(crate) fn new(client: &'a MarketClient, product_id: i64) -> Self {
        Self {
            client,
            product_id,
            change: ProductChange::default(),
        }
    }

    pub fn title(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::title(&mut self.change.title, raw)?;
        Ok(self)
    }

    pub fn description(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::description(&mut self.change.description, raw, "Product")?;
        Ok(self)
    }

    pub fn image<S: AsRef<str>>(&mut self, paths: &[S]) -> Result<&mut Self, ValidationError> {
        validate::images(&mut self.change.image, paths)?;
        Ok(self)
    }

    pub fn price(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::price(&mut self.change.price, raw)?;
        Ok(self)
    }

    pub fn stock(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::stock(&mut self.change.stock_count, raw)?;
        Ok(self)
    }

    pub const fn listed(&mut self, flag: bool) -> &mut Self {
        self.change.is_listed = Some(flag);
        self
    }

    #[must_use]
    pub const fn change(&self) -> &ProductChange {
        &self.change
    }

    /// Write the accumulated changes and return the updated row.
    ///
    /// # Errors
    ///
    /// Fails without a request when nothing has been changed.
    pub async fn modify(&self) -> MarketResult<Product> {
        if self.change.is_empty() {
            return Err(MarketError::from("No product changes specified"));
        }
        self.client
            .fetch(
                Query::update(Table::ProductInformation, &self.change)?
                    .eq("id", self.product_id)
                    .columns("*")
                    .single(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use mru_config::{BackendConfig, StorageConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn only_set_columns_reach_the_body() {
        let backend = BackendConfig {
            url: "http://localhost:54321".into(),
            anon_key: "anon".into(),
            ..BackendConfig::default()
        };
        let client = MarketClient::new(&backend, &StorageConfig::default()).expect("client");
        let mut modifier = ProductModifier::new(&client, 12);
        modifier.price("15").expect("price").listed(false);
        assert!(modifier.title("bad!").is_err());
        assert_eq!(
            serde_json::to_value(modifier.change()).expect("serialize"),
            json!({"price": 15.0, "isListed": false})
        );
    }
}
