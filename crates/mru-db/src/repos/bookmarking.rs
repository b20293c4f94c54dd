//! Bookmarking repository: the per-user bookmarker and its products.

use mru_core::entities::{BookmarkedProduct, Bookmarker};
use mru_core::enums::Table;
use mru_core::{MarketError, MarketResult};
use serde::Serialize;

use crate::MarketClient;
use crate::query::{Order, Query};

#[derive(Serialize)]
struct NewBookmarker<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
struct NewBookmark {
    shopping_cart_id: i64,
    product_id: i64,
}

impl MarketClient {
    /// The bookmarker owned by `user`.
    pub async fn bookmarker(&self, user: &str) -> MarketResult<Bookmarker> {
        self.fetch(
            Query::select(Table::ShoppingCart, "*")
                .eq("user_id", user)
                .single(),
        )
        .await
    }

    pub async fn register_bookmarker(&self, user: &str) -> MarketResult<Bookmarker> {
        self.fetch(
            Query::insert(Table::ShoppingCart, &NewBookmarker { user_id: user })?
                .columns("*")
                .single(),
        )
        .await
    }

    pub async fn bookmarked_products(
        &self,
        bookmarker_id: i64,
    ) -> MarketResult<Vec<BookmarkedProduct>> {
        self.fetch(
            Query::select(Table::ShoppingCartProducts, "*")
                .eq("shopping_cart_id", bookmarker_id)
                .order("created_at", Order::Desc),
        )
        .await
    }

    pub async fn store_bookmarks(
        &self,
        bookmarker_id: i64,
        products: &[i64],
    ) -> MarketResult<Vec<BookmarkedProduct>> {
        if products.is_empty() {
            return Err(MarketError::from("No products to bookmark"));
        }
        let rows: Vec<NewBookmark> = products
            .iter()
            .map(|&product_id| NewBookmark {
                shopping_cart_id: bookmarker_id,
                product_id,
            })
            .collect();
        self.fetch(Query::insert(Table::ShoppingCartProducts, &rows)?.columns("*"))
            .await
    }

    pub async fn remove_bookmarks(
        &self,
        bookmarker_id: i64,
        products: &[i64],
    ) -> MarketResult<Vec<BookmarkedProduct>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::delete(Table::ShoppingCartProducts)
                .eq("shopping_cart_id", bookmarker_id)
                .in_("product_id", products)
                .columns("*"),
        )
        .await
    }

    /// Remove every bookmark held by `bookmarker_id`.
    pub async fn clear_bookmarks(&self, bookmarker_id: i64) -> MarketResult<Vec<BookmarkedProduct>> {
        self.fetch(
            Query::delete(Table::ShoppingCartProducts)
                .eq("shopping_cart_id", bookmarker_id)
                .columns("*"),
        )
        .await
    }

    /// Bookmark `products` for `user`, creating the user's bookmarker on
    /// first use.
    pub async fn bookmark(
        &self,
        user: &str,
        products: &[i64],
    ) -> MarketResult<Vec<BookmarkedProduct>> {
        let bookmarker = match self.bookmarker(user).await {
            Ok(bookmarker) => bookmarker,
            Err(error) if error.is_not_found() => {
                tracing::debug!(user, "creating bookmarker on first bookmark");
                self.register_bookmarker(user).await?
            }
            Err(error) => return Err(error),
        };
        self.store_bookmarks(bookmarker.id, products).await
    }
}
