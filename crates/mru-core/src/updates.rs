//! Change records for partial updates.
//!
//! Each record holds `Option` columns; only `Some` columns are serialized into
//! the update body. Interaction updates resolve an explicit
//! `(Side, InteractionFlag)` pair to exactly one column through a match.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::ProductImages;
use crate::enums::{InteractionFlag, Side};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImages>,
    #[serde(rename = "isListed", skip_serializing_if = "Option::is_none")]
    pub is_listed: Option<bool>,
}

impl ProductChange {
    #[must_use]
    pub const fn listed(flag: bool) -> Self {
        Self {
            title: None,
            description: None,
            price: None,
            stock_count: None,
            image: None,
            is_listed: Some(flag),
        }
    }

    #[must_use]
    pub const fn stock(count: i64) -> Self {
        Self {
            title: None,
            description: None,
            price: None,
            stock_count: Some(count),
            image: None,
            is_listed: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_count.is_none()
            && self.image.is_none()
            && self.is_listed.is_none()
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct CategoryChangeBuilder(CategoryChange);

impl CategoryChangeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CategoryChange::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CategoryChange {
        self.0
    }
}

impl Default for CategoryChangeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `Some(None)` clears the stored picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<Option<String>>,
}

impl ProfileChange {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.user_name.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.profile_image.is_none()
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<Option<NaiveDate>>,
}

impl ReportChange {
    /// Close as of `date`.
    #[must_use]
    pub const fn close(date: NaiveDate) -> Self {
        Self {
            description: None,
            is_closed: Some(true),
            closed_date: Some(Some(date)),
        }
    }

    /// Reopen and clear the closed-date stamp.
    #[must_use]
    pub const fn reopen() -> Self {
        Self {
            description: None,
            is_closed: Some(false),
            closed_date: Some(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Body for chat and message show/hide updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub visible: bool,
}

// ---------------------------------------------------------------------------
// Interaction
// ---------------------------------------------------------------------------

/// Single-column update of an interaction row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_1_is_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_1_is_muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_2_is_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_2_is_muted: Option<bool>,
}

impl InteractionUpdate {
    /// Set `flag` on `side` to `value`, leaving every other column untouched.
    #[must_use]
    pub fn set(side: Side, flag: InteractionFlag, value: bool) -> Self {
        let mut update = Self::default();
        let column = match (side, flag) {
            (Side::First, InteractionFlag::Blocked) => &mut update.user_1_is_blocked,
            (Side::First, InteractionFlag::Muted) => &mut update.user_1_is_muted,
            (Side::Second, InteractionFlag::Blocked) => &mut update.user_2_is_blocked,
            (Side::Second, InteractionFlag::Muted) => &mut update.user_2_is_muted,
        };
        *column = Some(value);
        update
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn interaction_update_writes_one_column() {
        let update = InteractionUpdate::set(Side::Second, InteractionFlag::Blocked, true);
        assert_eq!(
            serde_json::to_value(update).expect("serialize"),
            json!({"user_2_is_blocked": true})
        );
        let update = InteractionUpdate::set(Side::First, InteractionFlag::Muted, false);
        assert_eq!(
            serde_json::to_value(update).expect("serialize"),
            json!({"user_1_is_muted": false})
        );
    }

    #[test]
    fn interaction_update_column_matches_side_column_name() {
        for side in [Side::First, Side::Second] {
            for flag in [InteractionFlag::Blocked, InteractionFlag::Muted] {
                let json = serde_json::to_value(InteractionUpdate::set(side, flag, true))
                    .expect("serialize");
                let keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
                assert_eq!(keys, vec![side.column(flag).to_string()]);
            }
        }
    }

    #[test]
    fn report_close_and_reopen_bodies() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).expect("date");
        assert_eq!(
            serde_json::to_value(ReportChange::close(date)).expect("serialize"),
            json!({"is_closed": true, "closed_date": "2025-03-14"})
        );
        assert_eq!(
            serde_json::to_value(ReportChange::reopen()).expect("serialize"),
            json!({"is_closed": false, "closed_date": null})
        );
    }

    #[test]
    fn listed_change_uses_backend_column_name() {
        assert_eq!(
            serde_json::to_value(ProductChange::listed(false)).expect("serialize"),
            json!({"isListed": false})
        );
        assert!(ProductChange::default().is_empty());
    }

    #[test]
    fn category_change_builder_sets_only_given_fields() {
        let change = CategoryChangeBuilder::new().name("Textbooks").build();
        assert_eq!(
            serde_json::to_value(change).expect("serialize"),
            json!({"name": "Textbooks"})
        );
    }
}
