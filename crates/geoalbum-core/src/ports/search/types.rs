//! Core-owned DTOs for photo search.
//!
//! These types cross the boundary between `geoalbum-flickr` and the services.
//! They contain only what pagination and provisioning need.

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;

/// Parameters of a single search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    #[must_use]
    pub const fn new(coordinate: Coordinate, page: u32, per_page: u32) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            page,
            per_page,
        }
    }
}

/// Classification of a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Body decoded and the service reported `stat = ok`.
    Success,
    /// 2xx response without a body.
    NoData,
    /// Malformed address, transport failure, timeout or non-2xx status.
    InvalidRequest,
    /// Body not decodable, `stat != ok`, or required fields missing.
    InvalidResponse,
}

impl SearchOutcome {
    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NoData => "no_data",
            Self::InvalidRequest => "invalid_request",
            Self::InvalidResponse => "invalid_response",
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One photo entry from a search page. Either field may be absent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: Option<String>,
    pub source_url: Option<String>,
}

impl SearchItem {
    pub fn new(title: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            source_url: Some(source_url.into()),
        }
    }
}

/// Result of a search call.
///
/// On success `page` and `total_pages` are the values echoed by the remote
/// service. On failure `page` echoes the request, `total_pages` is 0 and
/// `items` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub page: u32,
    pub total_pages: u32,
    pub items: Vec<SearchItem>,
    /// Human-readable description of a failure.
    pub detail: Option<String>,
}

impl SearchResult {
    #[must_use]
    pub const fn success(page: u32, total_pages: u32, items: Vec<SearchItem>) -> Self {
        Self {
            outcome: SearchOutcome::Success,
            page,
            total_pages,
            items,
            detail: None,
        }
    }

    pub fn failure(outcome: SearchOutcome, requested_page: u32, detail: impl Into<String>) -> Self {
        Self {
            outcome,
            page: requested_page,
            total_pages: 0,
            items: Vec::new(),
            detail: Some(detail.into()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == SearchOutcome::Success
    }
}
