//! Photo search port trait.

use super::types::{SearchRequest, SearchResult};
use async_trait::async_trait;

/// Port trait for geo-tagged photo search.
///
/// # Design
///
/// - Uses core-owned DTOs, not remote API types
/// - Exactly one `SearchResult` per call; failures are tagged outcomes, never `Err`
/// - No durable side effects
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoSearchPort: Send + Sync {
    /// Search for photos around a coordinate, returning one page of results.
    async fn search(&self, request: &SearchRequest) -> SearchResult;
}
