//! Realtime subscription descriptors and the insert-feed contract.
//!
//! The socket transport lives outside this crate. A [`ChannelSpec`] names
//! what to subscribe to; an [`InsertFeed`] receives each insert payload and
//! appends the decoded row to the caller's local list.

use mru_core::entities::{Chat, Message};
use mru_core::enums::Table;
use mru_core::{MarketError, MarketResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Database change event a channel listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeEvent {
    Insert,
    Update,
    Delete,
}

/// One postgres-changes subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSpec {
    pub topic: String,
    pub event: ChangeEvent,
    pub schema: String,
    pub table: Table,
    /// Row filter in `column=op.value` form.
    pub filter: String,
}

impl ChannelSpec {
    /// New messages in one chat.
    #[must_use]
    pub fn chat_messages(schema: &str, chat_id: i64) -> Self {
        Self {
            topic: format!("chat-{chat_id}"),
            event: ChangeEvent::Insert,
            schema: schema.to_string(),
            table: Table::Messages,
            filter: format!("chat_id=eq.{chat_id}"),
        }
    }

    /// New chats involving `user`. A filter can only test one column, so
    /// each participant column gets its own subscription.
    #[must_use]
    pub fn user_chats(schema: &str, user: &str) -> [Self; 2] {
        let spec = |column: &str| Self {
            topic: format!("user-chat-{user}"),
            event: ChangeEvent::Insert,
            schema: schema.to_string(),
            table: Table::Chats,
            filter: format!("{column}=eq.{user}"),
        };
        [spec("user_id_1"), spec("user_id_2")]
    }
}

/// Local list kept current by insert events.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertFeed<T> {
    rows: Vec<T>,
}

impl<T: DeserializeOwned> InsertFeed<T> {
    /// Start from rows already fetched.
    #[must_use]
    pub const fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Decode the `new` record of an insert payload and append it.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Decode` if the payload carries no record or the
    /// record does not fit `T`. Local state is unchanged on error.
    pub fn apply(&mut self, payload: &Value) -> MarketResult<&T> {
        let row: T = decode_record(payload)?;
        self.rows.push(row);
        self.rows.last().ok_or(MarketError::Empty)
    }

    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T> Default for InsertFeed<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl InsertFeed<Message> {
    /// Append only if the message belongs to `chat_id`.
    ///
    /// # Errors
    ///
    /// See [`InsertFeed::apply`].
    pub fn apply_for_chat(&mut self, chat_id: i64, payload: &Value) -> MarketResult<Option<&Message>> {
        let row: Message = decode_record(payload)?;
        if row.chat_id != chat_id {
            return Ok(None);
        }
        self.rows.push(row);
        Ok(self.rows.last())
    }
}

impl InsertFeed<Chat> {
    /// Append only if `user` takes part in the chat.
    ///
    /// # Errors
    ///
    /// See [`InsertFeed::apply`].
    pub fn apply_for_user(&mut self, user: &str, payload: &Value) -> MarketResult<Option<&Chat>> {
        let row: Chat = decode_record(payload)?;
        if !row.involves(user) {
            return Ok(None);
        }
        self.rows.push(row);
        Ok(self.rows.last())
    }
}

fn decode_record<T: DeserializeOwned>(payload: &Value) -> MarketResult<T> {
    let record = payload
        .get("new")
        .or_else(|| payload.get("record"))
        .ok_or_else(|| MarketError::Decode("insert payload has no record".into()))?;
    serde_json::from_value(record.clone()).map_err(|e| MarketError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn message_payload(id: i64, chat_id: i64) -> Value {
        json!({
            "eventType": "INSERT",
            "schema": "mru_dev",
            "table": "Messages",
            "new": {
                "id": id,
                "chat_id": chat_id,
                "sender_id": "uid-1",
                "logged_message": "is the lamp still available?",
                "visible": true,
                "created_at": "2025-03-14T10:00:00Z"
            }
        })
    }

    #[test]
    fn chat_channel_filters_on_chat_id() {
        let spec = ChannelSpec::chat_messages("mru_dev", 42);
        assert_eq!(spec.topic, "chat-42");
        assert_eq!(spec.filter, "chat_id=eq.42");
        assert_eq!(spec.table, Table::Messages);
    }

    #[test]
    fn user_channels_cover_both_columns() {
        let [first, second] = ChannelSpec::user_chats("mru_dev", "uid-7");
        assert_eq!(first.filter, "user_id_1=eq.uid-7");
        assert_eq!(second.filter, "user_id_2=eq.uid-7");
        assert_eq!(first.topic, second.topic);
    }

    #[test]
    fn insert_appends_in_arrival_order() {
        let mut feed = InsertFeed::<Message>::default();
        feed.apply(&message_payload(1, 3)).expect("decode");
        feed.apply(&message_payload(2, 3)).expect("decode");
        let ids: Vec<i64> = feed.rows().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn bad_payload_leaves_state_unchanged() {
        let mut feed = InsertFeed::<Message>::default();
        assert!(feed.apply(&json!({"new": {"id": "x"}})).is_err());
        assert!(feed.apply(&json!({})).is_err());
        assert!(feed.rows().is_empty());
    }

    #[test]
    fn chat_scoped_apply_ignores_other_chats() {
        let mut feed = InsertFeed::<Message>::default();
        assert!(feed.apply_for_chat(3, &message_payload(1, 9)).expect("decode").is_none());
        assert!(feed.apply_for_chat(3, &message_payload(2, 3)).expect("decode").is_some());
        assert_eq!(feed.rows().len(), 1);
    }
}
