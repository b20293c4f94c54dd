//! Listing repository: product and category writes.

use mru_core::entities::{CategorizedProduct, Category, Product, RowId};
use mru_core::enums::{Field, Table};
use mru_core::updates::{CategoryChange, ProductChange};
use mru_core::{MarketError, MarketResult, validate};
use serde::Serialize;

use crate::MarketClient;
use crate::builders::{ProductBuilder, ProductModifier};
use crate::query::Query;

#[derive(Serialize)]
struct NewCategory<'a> {
    name: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct Assignment {
    product_id: i64,
    category_id: i64,
}

impl MarketClient {
    /// Start a new listing.
    #[must_use]
    pub fn product_builder(&self) -> ProductBuilder<'_> {
        ProductBuilder::new(self)
    }

    /// Start modifying an existing listing.
    #[must_use]
    pub fn product_modifier(&self, product_id: i64) -> ProductModifier<'_> {
        ProductModifier::new(self, product_id)
    }

    /// Show or hide products from the catalogue.
    pub async fn set_listed(&self, listed: bool, ids: &[i64]) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::update(Table::ProductInformation, &ProductChange::listed(listed))?
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    /// Permanently delete products.
    pub async fn remove_products(&self, ids: &[i64]) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::delete(Table::ProductInformation)
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    /// Overwrite a product's stock count.
    pub async fn set_stock(&self, product_id: i64, stock: i64) -> MarketResult<Product> {
        let mut slot = None;
        let stock = validate::stock_value(&mut slot, stock)?;
        self.fetch(
            Query::update(Table::ProductInformation, &ProductChange::stock(stock))?
                .eq("id", product_id)
                .columns("*")
                .single(),
        )
        .await
    }

    pub async fn register_category(&self, name: &str, description: &str) -> MarketResult<Category> {
        let mut name_slot = None;
        let mut description_slot = None;
        let name = validate::required_id(
            &mut name_slot,
            name,
            Field::Category,
            "Category name is not specified",
        )?;
        let description = validate::description(&mut description_slot, description, "Category")?;
        self.fetch(
            Query::insert(
                Table::CategoryTags,
                &NewCategory {
                    name: &name,
                    description: &description,
                },
            )?
            .columns("*")
            .single(),
        )
        .await
    }

    pub async fn remove_categories(&self, ids: &[i64]) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(Query::delete(Table::CategoryTags).in_("id", ids).columns("id"))
            .await
    }

    pub async fn modify_category(
        &self,
        category_id: i64,
        change: &CategoryChange,
    ) -> MarketResult<Category> {
        if change.name.is_none() && change.description.is_none() {
            return Err(MarketError::from("No category changes specified"));
        }
        self.fetch(
            Query::update(Table::CategoryTags, change)?
                .eq("id", category_id)
                .columns("*")
                .single(),
        )
        .await
    }

    /// Assign categories to a product.
    pub async fn tag_product(
        &self,
        product_id: i64,
        categories: &[i64],
    ) -> MarketResult<Vec<CategorizedProduct>> {
        if categories.is_empty() {
            return Err(MarketError::from("Invalid product category tag(s)"));
        }
        let rows: Vec<Assignment> = categories
            .iter()
            .map(|&category_id| Assignment {
                product_id,
                category_id,
            })
            .collect();
        self.fetch(Query::insert(Table::CategoryAssignedProducts, &rows)?.columns("*"))
            .await
    }

    /// Replace a product's categories: drop existing assignments, then tag.
    pub async fn retag_product(
        &self,
        product_id: i64,
        categories: &[i64],
    ) -> MarketResult<Vec<CategorizedProduct>> {
        self.run(Query::delete(Table::CategoryAssignedProducts).eq("product_id", product_id))
            .await?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }
        self.tag_product(product_id, categories).await
    }
}
