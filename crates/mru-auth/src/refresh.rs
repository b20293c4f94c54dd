use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Sessions closer than this to expiry are refreshed before use.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Decode the `exp` claim of an access token without verifying it.
///
/// Used only to decide whether to refresh; the backend still validates
/// every token it receives.
///
/// # Errors
///
/// Returns `AuthError::Other` if the token is not a three-part JWT or the
/// `exp` claim is missing or unreadable.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// Whether `jwt` expires within `buffer_secs`. Undecodable tokens count as
/// expiring.
#[must_use]
pub fn needs_refresh(jwt: &str, buffer_secs: i64) -> bool {
    decode_expiry(jwt).map_or(true, |at| {
        at <= Utc::now() + chrono::TimeDelta::seconds(buffer_secs)
    })
}

#[cfg(test)]
pub(crate) fn jwt_with_exp(exp: i64) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(r#"{"alg":"HS256"}"#);
    let payload = engine.encode(format!(r#"{{"sub":"uid-1","exp":{exp}}}"#));
    let signature = engine.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_expiry_reads_exp_claim() {
        let exp = Utc::now().timestamp() + 3600;
        assert_eq!(decode_expiry(&jwt_with_exp(exp)).expect("valid").timestamp(), exp);
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let error = decode_expiry("not-a-jwt").expect_err("two dots required");
        assert!(error.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_bad_base64() {
        let error = decode_expiry("header.!!!invalid!!!.signature").expect_err("bad payload");
        assert!(error.to_string().contains("base64 decode failed"));
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let jwt = format!(
            "{}.{}.{}",
            engine.encode("{}"),
            engine.encode(r#"{"sub":"uid-1"}"#),
            engine.encode("sig")
        );
        let error = decode_expiry(&jwt).expect_err("no exp");
        assert!(error.to_string().contains("missing exp claim"));
    }

    #[test]
    fn refresh_needed_near_expiry_or_garbage() {
        let now = Utc::now().timestamp();
        assert!(!needs_refresh(&jwt_with_exp(now + 3600), EXPIRY_BUFFER_SECS));
        assert!(needs_refresh(&jwt_with_exp(now + 10), EXPIRY_BUFFER_SECS));
        assert!(needs_refresh("garbage", EXPIRY_BUFFER_SECS));
    }
}
