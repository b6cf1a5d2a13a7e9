//! Location repository trait definition.
//!
//! This port defines the interface for location persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Coordinate, Location, NewPhoto, PageCursor, Photo};

/// Repository for location persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Deleting a location deletes its photos
/// - `replace_page` is the only way the page cursor changes, and it changes
///   together with the photo set or not at all
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// List all locations, oldest first.
    async fn list(&self) -> Result<Vec<Location>, RepositoryError>;

    /// Get a location by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the location doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Location, RepositoryError>;

    /// Find a location placed at exactly this coordinate.
    async fn find_by_coordinate(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<Location>, RepositoryError>;

    /// Insert a new location with the initial cursor (`1/1`) and no photos.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if a location already
    /// exists at the same coordinate.
    async fn insert(&self, coordinate: Coordinate) -> Result<Location, RepositoryError>;

    /// Atomically store a fetched page: set the cursor and replace the
    /// location's photo set with `photos`.
    ///
    /// Returns the persisted photos in insertion order. Returns
    /// `Err(RepositoryError::NotFound)` without writing anything if the
    /// location no longer exists.
    async fn replace_page(
        &self,
        id: i64,
        cursor: PageCursor,
        photos: &[NewPhoto],
    ) -> Result<Vec<Photo>, RepositoryError>;

    /// Delete a location and, by cascade, all of its photos.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the location doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
