//! Error taxonomy for MRU Exchange.
//!
//! Every fallible operation in the workspace returns [`MarketResult<T>`]. The
//! variants separate the three kinds of failure a caller can branch on:
//! client-side validation (never reaches the backend), not-found/empty
//! results, and backend or transport failures passed through verbatim.
//! Configuration errors live in `mru-config`; the CLI converges everything
//! into `anyhow::Error`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Field;

/// Result envelope used by every data-access and builder operation.
pub type MarketResult<T> = Result<T, MarketError>;

/// A single field failed its validation rule.
///
/// The message is field-specific and shown to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Structured error returned by the backend (data, auth, or storage API).
///
/// Built once at the response boundary so nothing downstream handles an
/// untyped error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct BackendError {
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code (e.g. `PGRST116`, `23505`, `invalid_credentials`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// HTTP status of the failed response, when one was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Errors surfaced by MRU Exchange operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    /// A field failed client-side validation. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A single-row lookup matched zero rows.
    #[error("{entity} not found")]
    NotFound { entity: String },

    /// Canonical "no data" failure, also used as an initial state.
    #[error("Specified data is not present")]
    Empty,

    /// The backend rejected the request.
    #[error("{0}")]
    Backend(#[from] BackendError),

    /// The request never produced a response (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected row shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// No usable auth session is available.
    #[error("session error: {0}")]
    Session(String),

    /// Free-form failure built from a message.
    #[error("{0}")]
    Message(String),
}

impl MarketError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// Machine-readable code, if the backend supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Backend(error) => error.code.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<&str> for MarketError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for MarketError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_conversions_wrap_text() {
        let from_str: MarketError = "Unsupported operation".into();
        let from_string: MarketError = String::from("Unsupported operation").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.to_string(), "Unsupported operation");
    }

    #[test]
    fn empty_has_canonical_message() {
        assert_eq!(MarketError::Empty.to_string(), "Specified data is not present");
    }

    #[test]
    fn backend_error_keeps_code_and_message() {
        let error: MarketError = BackendError::new("duplicate key value")
            .with_code("23505")
            .with_status(409)
            .into();
        assert_eq!(error.code(), Some("23505"));
        assert_eq!(error.to_string(), "duplicate key value");
    }

    #[test]
    fn validation_error_displays_message_only() {
        let error: MarketError =
            ValidationError::new(Field::Price, "Product price cannot be negative").into();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Product price cannot be negative");
    }
}
