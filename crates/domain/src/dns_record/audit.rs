use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Bookkeeping columns every backend entity carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub date_created: NaiveDateTime,
    pub date_modified: NaiveDateTime,
    pub last_modifier: String,
}

impl AuditInfo {
    pub fn new(
        date_created: NaiveDateTime,
        date_modified: NaiveDateTime,
        last_modifier: impl Into<String>,
    ) -> Self {
        Self {
            date_created,
            date_modified,
            last_modifier: last_modifier.into(),
        }
    }
}
