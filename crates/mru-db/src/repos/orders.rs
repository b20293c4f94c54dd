//! Orders: purchase records and the mark-as-sold procedure.

use mru_core::MarketResult;
use mru_core::entities::ProductOrder;
use mru_core::enums::Table;
use serde::Serialize;

use crate::MarketClient;
use crate::query::{Order, Query};

/// Stored procedure that delists a product and records the sale.
pub const MARK_SOLD_FN: &str = "mark_product_as_sold";

#[derive(Serialize)]
struct MarkSoldArgs {
    product_id_param: i64,
}

impl MarketClient {
    /// Mark a product as sold through the backend procedure.
    pub async fn mark_sold(&self, product_id: i64) -> MarketResult<()> {
        tracing::info!(product_id, "marking product as sold");
        self.run(Query::rpc(
            MARK_SOLD_FN,
            &MarkSoldArgs {
                product_id_param: product_id,
            },
        )?)
        .await
    }

    /// Purchases made by `buyer`, newest first.
    pub async fn orders_by_buyer(&self, buyer: &str) -> MarketResult<Vec<ProductOrder>> {
        self.fetch(
            Query::select(Table::ProductOrder, "*")
                .eq("ordered_by_id", buyer)
                .order("created_at", Order::Desc),
        )
        .await
    }
}
