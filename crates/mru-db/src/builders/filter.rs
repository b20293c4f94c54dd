use std::collections::HashSet;

use mru_core::entities::Product;
use mru_core::enums::{Field, Table};
use mru_core::{MarketResult, ValidationError, validate};
use serde::Deserialize;

use crate::MarketClient;
use crate::query::{Order, Query};
use crate::repos::catalogue::search_terms;

#[derive(Deserialize)]
struct AssignedProduct {
    product_id: i64,
}

/// Orders a pair of bounds as `(low, high)`.
fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a { (b, a) } else { (a, b) }
}

/// Product search narrowed by seller, price and stock ranges, listing state,
/// free text, and category tags.
///
/// Category narrowing needs a second request: the base query runs first,
/// then the matched ids are intersected with the assignment table.
#[derive(Debug)]
pub struct ProductFilter<'a> {
    client: &'a MarketClient,
    seller: Option<String>,
    price: Option<(f64, f64)>,
    stock: Option<(i64, i64)>,
    listed: Option<bool>,
    search: Option<String>,
    categories: Vec<i64>,
}

impl<'a> ProductFilter<'a> {
    pub(crate) const fn new(client: &'a MarketClient) -> Self {
        Self {
            client,
            seller: None,
            price: None,
            stock: None,
            listed: None,
            search: None,
            categories: Vec::new(),
        }
    }

    pub fn seller(&mut self, supabase_id: &str) -> Result<&mut Self, ValidationError> {
        validate::required_id(
            &mut self.seller,
            supabase_id,
            Field::Seller,
            "Product seller is not specified",
        )?;
        Ok(self)
    }

    /// Price range, inclusive. Bounds may be given in either order.
    pub fn price(&mut self, a: f64, b: f64) -> Result<&mut Self, ValidationError> {
        let a = validate::price_value(&mut None, a)?;
        let b = validate::price_value(&mut None, b)?;
        self.price = Some(ordered(a, b));
        Ok(self)
    }

    /// Stock range, inclusive. Bounds may be given in either order.
    pub fn stock(&mut self, a: i64, b: i64) -> Result<&mut Self, ValidationError> {
        let a = validate::stock_value(&mut None, a)?;
        let b = validate::stock_value(&mut None, b)?;
        self.stock = Some(ordered(a, b));
        Ok(self)
    }

    pub const fn listed(&mut self, flag: bool) -> &mut Self {
        self.listed = Some(flag);
        self
    }

    /// Substring match on title or description.
    pub fn search(&mut self, text: &str) -> Result<&mut Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::new(
                Field::Search,
                "Search text is not specified",
            ));
        }
        self.search = Some(text.to_string());
        Ok(self)
    }

    /// Keep only products tagged with at least one of `ids`.
    pub fn categories(&mut self, ids: &[i64]) -> Result<&mut Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::new(
                Field::Category,
                "Product category is not specified",
            ));
        }
        self.categories = ids.to_vec();
        Ok(self)
    }

    #[must_use]
    pub const fn price_bounds(&self) -> Option<(f64, f64)> {
        self.price
    }

    #[must_use]
    pub const fn stock_bounds(&self) -> Option<(i64, i64)> {
        self.stock
    }

    /// The first of the two requests: every criterion except categories.
    #[must_use]
    pub fn base_query(&self) -> Query {
        let mut query = Query::select(Table::ProductInformation, "*");
        if let Some(seller) = &self.seller {
            query = query.eq("user_id", seller);
        }
        if let Some((low, high)) = self.price {
            query = query.gte("price", low).lte("price", high);
        }
        if let Some((low, high)) = self.stock {
            query = query.gte("stock_count", low).lte("stock_count", high);
        }
        if let Some(listed) = self.listed {
            query = query.eq("isListed", listed);
        }
        if let Some(text) = &self.search {
            query = query.or(&search_terms(text));
        }
        query.order("created_at", Order::Desc)
    }

    /// Run the search.
    ///
    /// # Errors
    ///
    /// Propagates the first failing request.
    pub async fn find(&self) -> MarketResult<Vec<Product>> {
        let mut products: Vec<Product> = self.client.fetch(self.base_query()).await?;
        if self.categories.is_empty() || products.is_empty() {
            return Ok(products);
        }

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        let tagged: Vec<AssignedProduct> = self
            .client
            .fetch(
                Query::select(Table::CategoryAssignedProducts, "product_id")
                    .in_("product_id", &ids)
                    .in_("category_id", &self.categories),
            )
            .await?;
        let tagged: HashSet<i64> = tagged.into_iter().map(|row| row.product_id).collect();
        products.retain(|product| tagged.contains(&product.id));
        tracing::debug!(matched = products.len(), "category filter applied");
        Ok(products)
    }
}
