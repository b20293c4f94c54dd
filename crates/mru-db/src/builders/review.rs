use mru_core::drafts::ReviewDraft;
use mru_core::entities::Review;
use mru_core::enums::{Field, Table};
use mru_core::{MarketResult, ValidationError, validate};

use crate::MarketClient;
use crate::query::Query;

/// Builds a review on a seller, optionally tied to one of their products.
#[derive(Debug)]
pub struct ReviewPublisher<'a> {
    client: &'a MarketClient,
    draft: ReviewDraft,
}

impl<'a> ReviewPublisher<'a> {
    pub(crate) fn new(client: &'a MarketClient, reviewer: &str) -> Self {
        Self {
            client,
            draft: ReviewDraft::new(reviewer),
        }
    }

    pub fn description(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::description(&mut self.draft.description, raw, "Review")?;
        Ok(self)
    }

    pub fn rating(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::rating(&mut self.draft.rating, raw)?;
        Ok(self)
    }

    pub fn rating_value(&mut self, value: f64) -> Result<&mut Self, ValidationError> {
        validate::rating_value(&mut self.draft.rating, value)?;
        Ok(self)
    }

    pub const fn product(&mut self, product_id: i64) -> &mut Self {
        self.draft.product_id = Some(product_id);
        self
    }

    pub fn seller(&mut self, supabase_id: &str) -> Result<&mut Self, ValidationError> {
        validate::required_id(
            &mut self.draft.created_on_id,
            supabase_id,
            Field::Seller,
            "Review seller is not specified",
        )?;
        Ok(self)
    }

    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Insert the review.
    ///
    /// # Errors
    ///
    /// Returns a validation error without sending anything if the seller,
    /// rating, or description is missing.
    pub async fn publish(&self) -> MarketResult<Review> {
        self.draft.ensure_complete()?;
        self.client
            .fetch(
                Query::insert(Table::Reviews, &self.draft)?
                    .columns("*")
                    .single(),
            )
            .await
    }
}
