//! Draft records accumulated by builders before a write.
//!
//! A draft is owned by exactly one builder. Fields are written only by the
//! validators in [`crate::validate`], and `None` fields are skipped when the
//! draft is serialized, so an insert body never carries a defaulted value.

use serde::Serialize;

use crate::entities::ProductImages;
use crate::enums::Field;
use crate::errors::ValidationError;

fn require<T>(value: Option<&T>, field: Field, message: &str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(field, message)),
    }
}

/// New product listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    #[serde(rename = "user_id", skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "stock_count", skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImages>,
}

impl ProductDraft {
    /// Check that every column without a backend default has been validated.
    ///
    /// Images are optional.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        require(self.seller.as_ref(), Field::Seller, "Missing product seller")?;
        require(self.title.as_ref(), Field::Title, "Product title is not specified")?;
        require(
            self.description.as_ref(),
            Field::Description,
            "Product description is not specified",
        )?;
        require(self.price.as_ref(), Field::Price, "Product price is not specified")?;
        require(self.stock.as_ref(), Field::Stock, "Product stock is not specified")
    }
}

/// New review. `created_on_id` is the reviewed seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewDraft {
    pub created_by_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReviewDraft {
    #[must_use]
    pub fn new(reviewer: impl Into<String>) -> Self {
        Self {
            created_by_id: reviewer.into(),
            ..Self::default()
        }
    }

    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        require(
            self.created_on_id.as_ref(),
            Field::Seller,
            "Review seller is not specified",
        )?;
        require(
            self.description.as_ref(),
            Field::Description,
            "Review description is not specified",
        )?;
        require(self.rating.as_ref(), Field::Rating, "Review rating is not specified")
    }
}

/// New report. The reported user is supplied at submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportDraft {
    pub created_by_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_information: Option<String>,
}

impl ReportDraft {
    #[must_use]
    pub fn new(reporter: impl Into<String>) -> Self {
        Self {
            created_by_id: reporter.into(),
            ..Self::default()
        }
    }

    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        require(
            self.description.as_ref(),
            Field::Description,
            "User report description is not specified",
        )
    }
}

/// Credentials collected by the sign-up, sign-in, and modify flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl CredentialsDraft {
    #[must_use]
    pub const fn has_login(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }

    #[must_use]
    pub const fn has_profile(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some() || self.username.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_draft_serializes_only_set_columns() {
        let draft = ProductDraft {
            seller: Some("uid-1".into()),
            title: Some("Lamp".into()),
            stock: Some(2),
            ..ProductDraft::default()
        };
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"user_id": "uid-1", "title": "Lamp", "stock_count": 2})
        );
    }

    #[test]
    fn incomplete_product_names_first_missing_field() {
        let draft = ProductDraft {
            seller: Some("uid-1".into()),
            title: Some("Lamp".into()),
            description: Some("Bright".into()),
            stock: Some(1),
            ..ProductDraft::default()
        };
        let error = draft.ensure_complete().expect_err("price missing");
        assert_eq!(error.field, Field::Price);
    }

    #[test]
    fn report_requires_description_only() {
        let mut draft = ReportDraft::new("uid-1");
        assert!(draft.ensure_complete().is_err());
        draft.description = Some("Spam listings".into());
        assert!(draft.ensure_complete().is_ok());
    }
}
