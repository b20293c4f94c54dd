//! Catalogue repository: product and category reads.

use mru_core::MarketResult;
use mru_core::entities::{CategorizedProduct, Category, Product};
use mru_core::enums::Table;
use mru_core::validate::escape_like;

use crate::MarketClient;
use crate::builders::ProductFilter;
use crate::query::{Order, Query, expr};

/// Filter terms for a case-insensitive substring search on title or
/// description. Wildcards in `text` are escaped first so they match
/// literally.
#[must_use]
pub fn search_terms(text: &str) -> Vec<String> {
    let pattern = format!("%{}%", escape_like(text.trim()));
    vec![
        expr("title", "ilike", &pattern),
        expr("description", "ilike", &pattern),
    ]
}

impl MarketClient {
    /// Products with any of the given ids.
    pub async fn products(&self, ids: &[i64]) -> MarketResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(Query::select(Table::ProductInformation, "*").in_("id", ids))
            .await
    }

    pub async fn product(&self, id: i64) -> MarketResult<Product> {
        self.fetch(
            Query::select(Table::ProductInformation, "*")
                .eq("id", id)
                .single(),
        )
        .await
    }

    pub async fn products_by_seller(&self, seller: &str) -> MarketResult<Vec<Product>> {
        self.fetch(
            Query::select(Table::ProductInformation, "*")
                .eq("user_id", seller)
                .order("created_at", Order::Desc),
        )
        .await
    }

    /// Case-insensitive search over title and description.
    pub async fn search_products(&self, text: &str) -> MarketResult<Vec<Product>> {
        self.fetch(
            Query::select(Table::ProductInformation, "*")
                .or(&search_terms(text))
                .order("created_at", Order::Desc),
        )
        .await
    }

    /// Products tagged with `category_id`, joined through the assignment table.
    pub async fn products_by_category(&self, category_id: i64) -> MarketResult<Vec<Product>> {
        let join = Table::CategoryAssignedProducts.as_str();
        self.fetch(
            Query::select(
                Table::ProductInformation,
                &format!("*,{join}!inner(category_id)"),
            )
            .eq(&format!("{join}.category_id"), category_id),
        )
        .await
    }

    /// Start a filtered product search.
    #[must_use]
    pub fn product_filter(&self) -> ProductFilter<'_> {
        ProductFilter::new(self)
    }

    /// All category tags, by name.
    pub async fn category_tags(&self) -> MarketResult<Vec<Category>> {
        self.fetch(Query::select(Table::CategoryTags, "*").order("name", Order::Asc))
            .await
    }

    pub async fn category_tag(&self, id: i64) -> MarketResult<Category> {
        self.fetch(Query::select(Table::CategoryTags, "*").eq("id", id).single())
            .await
    }

    pub async fn assignments_by_category(
        &self,
        category_id: i64,
    ) -> MarketResult<Vec<CategorizedProduct>> {
        self.fetch(Query::select(Table::CategoryAssignedProducts, "*").eq("category_id", category_id))
            .await
    }

    pub async fn assignments_by_product(
        &self,
        product_id: i64,
    ) -> MarketResult<Vec<CategorizedProduct>> {
        self.fetch(Query::select(Table::CategoryAssignedProducts, "*").eq("product_id", product_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_terms_cover_title_and_description() {
        assert_eq!(
            search_terms("lamp"),
            vec![
                r#"title.ilike."%lamp%""#.to_string(),
                r#"description.ilike."%lamp%""#.to_string(),
            ]
        );
    }

    #[test]
    fn search_terms_escape_wildcards_before_quoting() {
        // `100%_off` -> LIKE-escaped `100\%\_off` -> quoted with doubled backslashes
        let terms = search_terms("100%_off");
        assert_eq!(terms[0], r#"title.ilike."%100\\%\\_off%""#);
    }
}
