use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A conversation between an unordered pair of users (`Chats`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub user_id_1: String,
    pub user_id_2: String,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    #[must_use]
    pub fn involves(&self, user: &str) -> bool {
        self.user_id_1 == user || self.user_id_2 == user
    }

    /// The participant that is not `user`.
    #[must_use]
    pub fn other_participant(&self, user: &str) -> Option<&str> {
        if self.user_id_1 == user {
            Some(&self.user_id_2)
        } else if self.user_id_2 == user {
            Some(&self.user_id_1)
        } else {
            None
        }
    }
}

/// A message inside one chat (`Messages`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: String,
    pub logged_message: String,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
}
