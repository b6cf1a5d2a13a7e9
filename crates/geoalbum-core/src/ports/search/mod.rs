//! Photo search port definitions.
//!
//! This module defines the port trait and DTOs for the remote image-search
//! service. The actual implementation lives in `geoalbum-flickr`.

mod client;
mod types;

#[cfg(test)]
pub use client::MockPhotoSearchPort;
pub use client::PhotoSearchPort;
pub use types::{SearchItem, SearchOutcome, SearchRequest, SearchResult};
