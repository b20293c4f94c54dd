use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Id-only projection returned by inserts that `select=id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct RowId {
    pub id: i64,
}
