//! The single normalization point between raw backend responses and
//! [`MarketResult`].
//!
//! Every repository method ends by adapting a [`RawResponse`]: an error
//! becomes `Err`, data becomes `Ok`, and a response with neither becomes
//! [`MarketError::Empty`].

use mru_core::{BackendError, MarketError, MarketResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Code the data API returns when a single-object request did not match
/// exactly one row. `details` says how many rows it did match.
pub const NO_ROWS_CODE: &str = "PGRST116";

const ZERO_ROWS_DETAILS: &str = "The result contains 0 rows";

/// The `{data, error}` pair produced by one backend call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub data: Option<Value>,
    pub error: Option<BackendError>,
}

impl RawResponse {
    #[must_use]
    pub const fn success(data: Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub const fn failure(error: BackendError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }
}

/// Only a zero-row match is "not found"; several matching rows stay a
/// backend error so callers never create another row on top of them.
fn into_error(error: BackendError, entity: &str) -> MarketError {
    let matched_nothing = error.code.as_deref() == Some(NO_ROWS_CODE)
        && error.details.as_deref().map(str::trim) == Some(ZERO_ROWS_DETAILS);
    if matched_nothing {
        MarketError::not_found(entity)
    } else {
        MarketError::Backend(error)
    }
}

/// Adapt a raw response into typed rows.
///
/// `entity` names what was being looked up, for not-found errors.
///
/// # Errors
///
/// - `MarketError::NotFound` for a single-row lookup that matched nothing
/// - `MarketError::Backend` for any other backend error
/// - `MarketError::Empty` when the response carried no data
/// - `MarketError::Decode` when the data does not fit `T`
pub fn adapt<T: DeserializeOwned>(raw: RawResponse, entity: &str) -> MarketResult<T> {
    if let Some(error) = raw.error {
        return Err(into_error(error, entity));
    }
    match raw.data {
        Some(data) => serde_json::from_value(data).map_err(|e| MarketError::Decode(e.to_string())),
        None => Err(MarketError::Empty),
    }
}

/// Adapt a response whose body is irrelevant (e.g. a void procedure).
///
/// # Errors
///
/// Returns the backend error if one is present.
pub fn adapt_unit(raw: RawResponse, entity: &str) -> MarketResult<()> {
    match raw.error {
        Some(error) => Err(into_error(error, entity)),
        None => Ok(()),
    }
}
