//! Photo repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Photo;

/// Repository for photo records.
///
/// Photos are only created through `LocationRepository::replace_page`, so
/// this port covers reads and deletions.
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// List the photos of a location in insertion (search result) order.
    async fn list_for_location(&self, location_id: i64) -> Result<Vec<Photo>, RepositoryError>;

    /// Get a photo by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the photo doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Photo, RepositoryError>;

    /// Delete a single photo.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the photo doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Delete every photo of a location and return the removed records.
    async fn delete_for_location(&self, location_id: i64) -> Result<Vec<Photo>, RepositoryError>;
}
