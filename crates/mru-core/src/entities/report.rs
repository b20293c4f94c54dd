use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An abuse report filed by one user against another (`Reports`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub created_by_id: String,
    pub created_on_id: String,
    pub description: String,
    /// Object key of an attached text file.
    pub linked_information: Option<String>,
    pub is_closed: bool,
    pub closed_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
