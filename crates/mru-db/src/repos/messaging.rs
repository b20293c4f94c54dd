//! Messaging repository: chats and the messages inside them.

use mru_core::entities::{Chat, Message, RowId};
use mru_core::enums::Table;
use mru_core::updates::Visibility;
use mru_core::{MarketResult, validate};
use serde::Serialize;

use crate::MarketClient;
use crate::query::{Order, Query, either_order, expr};

#[derive(Serialize)]
struct NewChat<'a> {
    user_id_1: &'a str,
    user_id_2: &'a str,
}

#[derive(Serialize)]
struct NewMessage<'a> {
    chat_id: i64,
    sender_id: &'a str,
    logged_message: &'a str,
}

impl MarketClient {
    // -- chats -----------------------------------------------------------

    pub async fn chat(&self, id: i64) -> MarketResult<Chat> {
        self.fetch(Query::select(Table::Chats, "*").eq("id", id).single())
            .await
    }

    /// Chats `user` participates in, newest first.
    pub async fn chats_for_user(&self, user: &str) -> MarketResult<Vec<Chat>> {
        self.fetch(
            Query::select(Table::Chats, "*")
                .or(&[expr("user_id_1", "eq", user), expr("user_id_2", "eq", user)])
                .order("created_at", Order::Desc),
        )
        .await
    }

    /// The chat between `a` and `b`, whichever of them opened it.
    pub async fn chat_between(&self, a: &str, b: &str) -> MarketResult<Chat> {
        self.fetch(
            Query::select(Table::Chats, "*")
                .or(&either_order("user_id_1", "user_id_2", a, b))
                .single(),
        )
        .await
    }

    /// Existing chat between the pair, or a new one opened by `a`.
    pub async fn open_chat(&self, a: &str, b: &str) -> MarketResult<Chat> {
        match self.chat_between(a, b).await {
            Err(error) if error.is_not_found() => self.register_chat(a, b).await,
            found => found,
        }
    }

    pub async fn show_chats(&self, visible: bool, ids: &[i64]) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::update(Table::Chats, &Visibility { visible })?
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    pub async fn register_chat(&self, a: &str, b: &str) -> MarketResult<Chat> {
        self.fetch(
            Query::insert(
                Table::Chats,
                &NewChat {
                    user_id_1: a,
                    user_id_2: b,
                },
            )?
            .columns("*")
            .single(),
        )
        .await
    }

    // -- messages --------------------------------------------------------

    /// Visible messages in `chat`, oldest first.
    pub async fn messages(&self, chat: i64) -> MarketResult<Vec<Message>> {
        self.fetch(
            Query::select(Table::Messages, "*")
                .eq("chat_id", chat)
                .eq("visible", true)
                .order("created_at", Order::Asc),
        )
        .await
    }

    pub async fn send_message(&self, chat: i64, sender: &str, text: &str) -> MarketResult<Message> {
        let mut slot = None;
        let text = validate::message_text(&mut slot, text)?;
        self.fetch(
            Query::insert(
                Table::Messages,
                &NewMessage {
                    chat_id: chat,
                    sender_id: sender,
                    logged_message: &text,
                },
            )?
            .columns("*")
            .single(),
        )
        .await
    }

    /// Show or hide a sender's messages within one chat.
    pub async fn show_messages(
        &self,
        chat: i64,
        sender: &str,
        visible: bool,
        ids: &[i64],
    ) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::update(Table::Messages, &Visibility { visible })?
                .eq("chat_id", chat)
                .eq("sender_id", sender)
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    pub async fn hide_message(&self, id: i64) -> MarketResult<RowId> {
        self.fetch(
            Query::update(Table::Messages, &Visibility { visible: false })?
                .eq("id", id)
                .columns("id")
                .single(),
        )
        .await
    }

    /// Hide every message `sender` has sent, across all chats.
    pub async fn hide_all_messages(&self, sender: &str) -> MarketResult<Vec<RowId>> {
        self.fetch(
            Query::update(Table::Messages, &Visibility { visible: false })?
                .eq("sender_id", sender)
                .columns("id"),
        )
        .await
    }

    pub async fn remove_messages(
        &self,
        chat: i64,
        sender: &str,
        ids: &[i64],
    ) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::delete(Table::Messages)
                .eq("chat_id", chat)
                .eq("sender_id", sender)
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    pub async fn remove_message(&self, id: i64) -> MarketResult<RowId> {
        self.fetch(
            Query::delete(Table::Messages)
                .eq("id", id)
                .columns("id")
                .single(),
        )
        .await
    }

    pub async fn remove_all_messages(&self, sender: &str) -> MarketResult<Vec<RowId>> {
        self.fetch(
            Query::delete(Table::Messages)
                .eq("sender_id", sender)
                .columns("id"),
        )
        .await
    }
}
