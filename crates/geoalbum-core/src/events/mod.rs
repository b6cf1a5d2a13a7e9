//! Canonical event union for provisioning events.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "photos_provisioned", "locationId": 3, "page": 2, "totalPages": 9, "count": 25 }
//! ```
//!
//! The fetch-failure signal carries no payload beyond its topic name.

mod broadcaster;

use serde::{Deserialize, Serialize};

pub use broadcaster::EventBroadcaster;

/// Topic name of the fetch-failure signal.
pub const FETCH_FAILED_TOPIC: &str = "photos_fetch_failed";

/// Canonical event types for all observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A provisioning search failed. Raised exactly once per failed attempt.
    PhotosFetchFailed,

    /// A location's current page was stored.
    PhotosProvisioned {
        #[serde(rename = "locationId")]
        location_id: i64,
        page: u32,
        #[serde(rename = "totalPages")]
        total_pages: u32,
        /// Number of photo records written.
        count: usize,
    },

    /// A single photo was deleted by the user.
    PhotoRemoved {
        #[serde(rename = "photoId")]
        photo_id: i64,
        #[serde(rename = "locationId")]
        location_id: i64,
    },

    /// A location (and its photos) was deleted.
    LocationRemoved {
        #[serde(rename = "locationId")]
        location_id: i64,
    },
}

impl AppEvent {
    /// Create a photos provisioned event.
    pub const fn photos_provisioned(
        location_id: i64,
        page: u32,
        total_pages: u32,
        count: usize,
    ) -> Self {
        Self::PhotosProvisioned {
            location_id,
            page,
            total_pages,
            count,
        }
    }

    /// Create a photo removed event.
    pub const fn photo_removed(photo_id: i64, location_id: i64) -> Self {
        Self::PhotoRemoved {
            photo_id,
            location_id,
        }
    }

    /// Create a location removed event.
    pub const fn location_removed(location_id: i64) -> Self {
        Self::LocationRemoved { location_id }
    }

    /// Get the event name for wire protocols.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::PhotosFetchFailed => FETCH_FAILED_TOPIC,
            Self::PhotosProvisioned { .. } => "photos_provisioned",
            Self::PhotoRemoved { .. } => "photo_removed",
            Self::LocationRemoved { .. } => "location_removed",
        }
    }
}
