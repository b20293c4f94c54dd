//! Review repository: product and seller reviews plus rating aggregates.

use mru_core::entities::{AverageRating, Review, RowId};
use mru_core::enums::Table;
use mru_core::updates::ReviewChange;
use mru_core::{MarketError, MarketResult, validate};

use crate::MarketClient;
use crate::builders::ReviewPublisher;
use crate::query::{Order, Query};

/// Projection computing the mean rating on the backend.
pub const AVERAGE_SELECT: &str = "rating:rating.avg()";

impl MarketClient {
    pub async fn product_reviews(&self, product: i64) -> MarketResult<Vec<Review>> {
        self.fetch(
            Query::select(Table::Reviews, "*")
                .eq("product_id", product)
                .order("created_at", Order::Desc),
        )
        .await
    }

    pub async fn product_review_by_reviewer(
        &self,
        product: i64,
        reviewer: &str,
    ) -> MarketResult<Review> {
        self.fetch(
            Query::select(Table::Reviews, "*")
                .eq("product_id", product)
                .eq("created_by_id", reviewer)
                .single(),
        )
        .await
    }

    pub async fn seller_reviews(&self, seller: &str) -> MarketResult<Vec<Review>> {
        self.fetch(
            Query::select(Table::Reviews, "*")
                .eq("created_on_id", seller)
                .order("created_at", Order::Desc),
        )
        .await
    }

    pub async fn seller_review_by_reviewer(
        &self,
        seller: &str,
        reviewer: &str,
    ) -> MarketResult<Review> {
        self.fetch(
            Query::select(Table::Reviews, "*")
                .eq("created_on_id", seller)
                .eq("created_by_id", reviewer)
                .single(),
        )
        .await
    }

    /// Mean rating across a product's reviews; `None` when unreviewed.
    pub async fn average_product_rating(&self, product: i64) -> MarketResult<Option<f64>> {
        let row: AverageRating = self
            .fetch(
                Query::select(Table::Reviews, AVERAGE_SELECT)
                    .eq("product_id", product)
                    .single(),
            )
            .await?;
        Ok(row.rating)
    }

    /// Mean rating across a seller's reviews; `None` when unreviewed.
    pub async fn average_seller_rating(&self, seller: &str) -> MarketResult<Option<f64>> {
        let row: AverageRating = self
            .fetch(
                Query::select(Table::Reviews, AVERAGE_SELECT)
                    .eq("created_on_id", seller)
                    .single(),
            )
            .await?;
        Ok(row.rating)
    }

    #[must_use]
    pub fn review_publisher(&self, reviewer: &str) -> ReviewPublisher<'_> {
        ReviewPublisher::new(self, reviewer)
    }

    pub async fn remove_reviews(&self, reviewer: &str, ids: &[i64]) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::delete(Table::Reviews)
                .eq("created_by_id", reviewer)
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    /// Update the rating and/or description of one of `reviewer`'s reviews.
    /// Both values are validated before anything is sent.
    pub async fn modify_review(
        &self,
        reviewer: &str,
        id: i64,
        rating: Option<f64>,
        description: Option<&str>,
    ) -> MarketResult<Review> {
        let mut change = ReviewChange::default();
        if let Some(rating) = rating {
            validate::rating_value(&mut change.rating, rating)?;
        }
        if let Some(description) = description {
            validate::description(&mut change.description, description, "Review")?;
        }
        if change.rating.is_none() && change.description.is_none() {
            return Err(MarketError::from("No review changes specified"));
        }
        self.fetch(
            Query::update(Table::Reviews, &change)?
                .eq("created_by_id", reviewer)
                .eq("id", id)
                .columns("*")
                .single(),
        )
        .await
    }
}
