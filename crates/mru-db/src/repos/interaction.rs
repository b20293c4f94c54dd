//! Interaction repository: block and mute state between two users.
//!
//! One row holds the state for an unordered pair. Updates first re-read the
//! row, resolve which side the target occupies, then write exactly that
//! side's column.

use mru_core::MarketResult;
use mru_core::entities::Interaction;
use mru_core::enums::{InteractionFlag, Table};
use mru_core::updates::InteractionUpdate;
use serde::Serialize;

use crate::MarketClient;
use crate::query::{Query, either_order, expr, or_group};

#[derive(Serialize)]
struct NewInteraction<'a> {
    user_id_1: &'a str,
    user_id_2: &'a str,
}

/// Rows involving `user` where either side carries `flag`.
fn flagged(user: &str, flag: InteractionFlag) -> Query {
    let (first, second) = match flag {
        InteractionFlag::Blocked => ("user_1_is_blocked", "user_2_is_blocked"),
        InteractionFlag::Muted => ("user_1_is_muted", "user_2_is_muted"),
    };
    Query::select(Table::UserInteractions, "*").and(&[
        or_group(&[expr("user_id_1", "eq", user), expr("user_id_2", "eq", user)]),
        or_group(&[expr(first, "eq", true), expr(second, "eq", true)]),
    ])
}

impl MarketClient {
    /// The interaction row for `a` and `b`, in either column order.
    pub async fn interaction(&self, a: &str, b: &str) -> MarketResult<Interaction> {
        self.fetch(
            Query::select(Table::UserInteractions, "*")
                .or(&either_order("user_id_1", "user_id_2", a, b))
                .single(),
        )
        .await
    }

    pub async fn blocked_interactions(&self, user: &str) -> MarketResult<Vec<Interaction>> {
        self.fetch(flagged(user, InteractionFlag::Blocked)).await
    }

    pub async fn muted_interactions(&self, user: &str) -> MarketResult<Vec<Interaction>> {
        self.fetch(flagged(user, InteractionFlag::Muted)).await
    }

    pub async fn create_interaction(&self, a: &str, b: &str) -> MarketResult<Interaction> {
        self.fetch(
            Query::insert(
                Table::UserInteractions,
                &NewInteraction {
                    user_id_1: a,
                    user_id_2: b,
                },
            )?
            .columns("*")
            .single(),
        )
        .await
    }

    async fn set_flag(
        &self,
        actor: &str,
        target: &str,
        flag: InteractionFlag,
        value: bool,
    ) -> MarketResult<Interaction> {
        let row = self.interaction(actor, target).await?;
        let side = row.side_of(target);
        tracing::debug!(interaction = row.id, ?side, ?flag, value, "updating interaction");
        self.fetch(
            Query::update(
                Table::UserInteractions,
                &InteractionUpdate::set(side, flag, value),
            )?
            .eq("id", row.id)
            .columns("*")
            .single(),
        )
        .await
    }

    /// Set or clear the blocked flag on `target`'s side of the pair.
    pub async fn block(&self, blocker: &str, target: &str, flag: bool) -> MarketResult<Interaction> {
        self.set_flag(blocker, target, InteractionFlag::Blocked, flag)
            .await
    }

    /// Set or clear the muted flag on `target`'s side of the pair.
    pub async fn mute(&self, muter: &str, target: &str, flag: bool) -> MarketResult<Interaction> {
        self.set_flag(muter, target, InteractionFlag::Muted, flag)
            .await
    }

    pub async fn unblock(&self, blocker: &str, target: &str) -> MarketResult<Interaction> {
        self.block(blocker, target, false).await
    }

    pub async fn unmute(&self, muter: &str, target: &str) -> MarketResult<Interaction> {
        self.mute(muter, target, false).await
    }
}
