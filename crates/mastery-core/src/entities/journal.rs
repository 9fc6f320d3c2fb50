use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A short timestamped reflection documenting an insight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub reflection: String,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}
