//! Photo domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photo record belonging to exactly one location.
///
/// `source_url` never changes after creation: cache keys are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub location_id: i64,
    pub title: String,
    pub source_url: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new photo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub title: String,
    pub source_url: String,
}

impl NewPhoto {
    pub fn new(title: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source_url: source_url.into(),
        }
    }
}
