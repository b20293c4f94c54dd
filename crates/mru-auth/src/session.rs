//! Auth API session and user shapes.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signed-in user as returned by the auth API (`/user`, or embedded in a
/// session). `id` is the subject id every marketplace row is keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_metadata: Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AuthUser {
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

/// Tokens issued by a password or refresh-token grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp, seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    /// Expiry instant, from `expires_at` when present, else the token's own
    /// `exp` claim.
    #[must_use]
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| crate::refresh::decode_expiry(&self.access_token).ok())
    }

    /// Expired, or expiring within `buffer_secs`. Unknown expiry counts as
    /// expired.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires()
            .is_none_or(|at| at <= Utc::now() + TimeDelta::seconds(buffer_secs))
    }
}

/// Profile fields carried in sign-up metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Body for `PUT /user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Result of a sign-up. With email confirmation enabled the backend returns
/// only the user; otherwise the new account is signed in straight away.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    PendingConfirmation(AuthUser),
    SignedIn(Session),
}

impl SignUpOutcome {
    #[must_use]
    pub const fn user(&self) -> &AuthUser {
        match self {
            Self::PendingConfirmation(user) => user,
            Self::SignedIn(session) => &session.user,
        }
    }
}
