//! Shared HTTP response helpers.
//!
//! Turns every backend response into a [`RawResponse`] so the adapter is the
//! only place that decides between success and failure. Non-success bodies
//! are parsed into a [`BackendError`] whatever API produced them: the data
//! API sends `{code, message, details, hint}`, the auth API sends
//! `{error_code, msg}` or `{error, error_description}`, and storage sends
//! `{statusCode, error, message}`.

use mru_core::{BackendError, MarketError, MarketResult};
use serde_json::Value;

use crate::adapter::RawResponse;

/// Read a response into its `{data, error}` pair.
///
/// An empty success body yields neither data nor error.
///
/// # Errors
///
/// Returns `MarketError::Transport` if the body cannot be read and
/// `MarketError::Decode` if a success body is not JSON.
pub async fn read_response(resp: reqwest::Response) -> MarketResult<RawResponse> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| MarketError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Ok(RawResponse::failure(backend_error(status.as_u16(), &body)));
    }
    if body.trim().is_empty() {
        return Ok(RawResponse::default());
    }
    let data: Value =
        serde_json::from_str(&body).map_err(|e| MarketError::Decode(e.to_string()))?;
    Ok(RawResponse::success(data))
}

/// Build a [`BackendError`] from a non-success status and body.
#[must_use]
pub fn backend_error(status: u16, body: &str) -> BackendError {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        let message = if body.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            body.trim().to_string()
        };
        return BackendError::new(message).with_status(status);
    };

    let text = |key: &str| -> Option<String> {
        match map.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    };

    let message = text("message")
        .or_else(|| text("msg"))
        .or_else(|| text("error_description"))
        .or_else(|| text("error"))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    let code = text("error_code")
        .or_else(|| map.get("code").and_then(Value::as_str).map(String::from))
        .or_else(|| text("error"));

    BackendError {
        message,
        code,
        details: text("details"),
        hint: text("hint"),
        status: Some(status),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn data_api_error_shape() {
        let error = backend_error(
            406,
            r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#,
        );
        assert_eq!(error.code.as_deref(), Some("PGRST116"));
        assert_eq!(error.details.as_deref(), Some("The result contains 0 rows"));
        assert_eq!(error.hint, None);
        assert_eq!(error.status, Some(406));
    }

    #[test]
    fn auth_error_shape() {
        let error = backend_error(
            400,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(error.message, "Invalid login credentials");
        assert_eq!(error.code.as_deref(), Some("invalid_credentials"));
    }

    #[test]
    fn oauth_style_error_shape() {
        let error = backend_error(
            400,
            r#"{"error":"invalid_grant","error_description":"Refresh Token Not Found"}"#,
        );
        assert_eq!(error.message, "Refresh Token Not Found");
        assert_eq!(error.code.as_deref(), Some("invalid_grant"));
    }

    #[test]
    fn plain_text_body_becomes_message() {
        let error = backend_error(502, "Bad Gateway");
        assert_eq!(error.message, "Bad Gateway");
        assert_eq!(error.status, Some(502));
        assert_eq!(backend_error(500, "").message, "request failed with status 500");
    }

    #[tokio::test]
    async fn success_body_becomes_data() {
        let raw = read_response(mock_response(200, r#"[{"id":1}]"#))
            .await
            .unwrap();
        assert_eq!(raw.data, Some(serde_json::json!([{"id": 1}])));
        assert!(raw.error.is_none());
    }

    #[tokio::test]
    async fn empty_success_body_has_neither() {
        let raw = read_response(mock_response(204, "")).await.unwrap();
        assert!(raw.data.is_none());
        assert!(raw.error.is_none());
    }

    #[tokio::test]
    async fn failure_body_becomes_error() {
        let raw = read_response(mock_response(
            409,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        ))
        .await
        .unwrap();
        assert!(raw.data.is_none());
        assert_eq!(
            raw.error.and_then(|e| e.code).as_deref(),
            Some("23505")
        );
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let err = read_response(mock_response(200, "<html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::Decode(_)));
    }
}
