use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{InteractionFlag, Side};

/// Block/mute state between an unordered pair of users (`User_Interactions`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Interaction {
    pub id: i64,
    pub user_id_1: String,
    pub user_id_2: String,
    pub user_1_is_blocked: bool,
    pub user_1_is_muted: bool,
    pub user_2_is_blocked: bool,
    pub user_2_is_muted: bool,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Side occupied by `target`.
    ///
    /// Anything other than `user_id_1` resolves to the second side, matching
    /// how the row is keyed for updates.
    #[must_use]
    pub fn side_of(&self, target: &str) -> Side {
        if self.user_id_1 == target {
            Side::First
        } else {
            Side::Second
        }
    }

    #[must_use]
    pub const fn flag(&self, side: Side, flag: InteractionFlag) -> bool {
        match (side, flag) {
            (Side::First, InteractionFlag::Blocked) => self.user_1_is_blocked,
            (Side::First, InteractionFlag::Muted) => self.user_1_is_muted,
            (Side::Second, InteractionFlag::Blocked) => self.user_2_is_blocked,
            (Side::Second, InteractionFlag::Muted) => self.user_2_is_muted,
        }
    }

    /// Whether `user` has been blocked by the other participant.
    #[must_use]
    pub fn is_blocked(&self, user: &str) -> bool {
        self.flag(self.side_of(user), InteractionFlag::Blocked)
    }

    #[must_use]
    pub fn is_muted(&self, user: &str) -> bool {
        self.flag(self.side_of(user), InteractionFlag::Muted)
    }
}
