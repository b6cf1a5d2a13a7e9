//! Location domain types.
//!
//! A location ("pin") is a user-placed geographic point. It owns the
//! pagination cursor for its photo search and, through the repository,
//! zero or more photos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Coordinate
// ─────────────────────────────────────────────────────────────────────────────

/// Geographic coordinate of a location. Immutable once the location exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Cursor
// ─────────────────────────────────────────────────────────────────────────────

/// The pagination state of a location's photo search.
///
/// `current_page` always lies in `[1, total_pages]`. The remote service is
/// authoritative for `total_pages`; it is learned from the last successful
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageCursor {
    /// Cursor of a freshly placed location.
    pub const INITIAL: Self = Self {
        current_page: 1,
        total_pages: 1,
    };

    /// Build a cursor from values reported by the search service.
    ///
    /// The service reports `pages = 0` when a coordinate has no photos, so
    /// both values are clamped to keep the cursor invariant.
    #[must_use]
    pub fn normalized(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// The page that follows the current one, wrapping to 1 past the end.
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        match self.current_page.checked_add(1) {
            Some(next) if next <= self.total_pages => next,
            _ => 1,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::INITIAL
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Location
// ─────────────────────────────────────────────────────────────────────────────

/// A persisted location with its durable pagination cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Database ID of the location.
    pub id: i64,
    /// Where the pin was placed.
    pub coordinate: Coordinate,
    /// Durable pagination state.
    pub cursor: PageCursor,
    /// Number of photo records currently owned by the location.
    pub photo_count: u32,
    /// UTC timestamp of when the pin was placed.
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Whether the location owns at least one photo.
    #[must_use]
    pub const fn has_photos(&self) -> bool {
        self.photo_count > 0
    }
}
