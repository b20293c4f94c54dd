use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stored profile picture reference.
///
/// Older rows hold an object with a `url` key; newer rows hold the public
/// URL directly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProfileImage {
    Url(String),
    Object { url: String },
}

impl ProfileImage {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Url(url) | Self::Object { url } => url,
        }
    }
}

/// A marketplace user (`User_Information`), keyed by the auth subject id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub supabase_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<ProfileImage>,
    pub rating: Option<f64>,
    pub is_flagged: bool,
    pub flagged_type: Option<String>,
    pub is_deleted: bool,
    pub deleted_on: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// "First Last", skipping whichever part is missing.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
