//! Per-location page rotation.
//!
//! The controller owns the only code path that changes a location's cursor
//! or photo set in response to a search. All work on one location runs
//! under that location's lock; different locations proceed in parallel.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info, warn};

use super::ProvisioningError;
use crate::domain::{Location, NewPhoto, PageCursor, Photo};
use crate::ports::{
    LocationRepository, PhotoRepository, PhotoSearchPort, SearchItem, SearchRequest,
    SearchResult,
};
use crate::utils::KeyedLocks;

/// A page that was searched and stored for a location.
#[derive(Debug, Clone)]
pub struct ProvisionedPage {
    pub location_id: i64,
    /// Cursor after the page was applied.
    pub cursor: PageCursor,
    /// The location's new photo set, in search result order.
    pub photos: Vec<Photo>,
    /// Previous photos whose source URL is no longer in the set.
    pub displaced: Vec<Photo>,
}

/// Result of rotating a location to its next page.
///
/// The old photos are deleted before the search runs, so they are reported
/// even when the search fails.
#[derive(Debug)]
pub struct Advance {
    /// Photos deleted before the next page was requested.
    pub removed: Vec<Photo>,
    /// The stored page, or why nothing was stored.
    pub result: Result<ProvisionedPage, ProvisioningError>,
}

/// Drives searches for locations and applies their results.
pub struct PaginationController {
    locations: Arc<dyn LocationRepository>,
    photos: Arc<dyn PhotoRepository>,
    search: Arc<dyn PhotoSearchPort>,
    per_page: u32,
    locks: KeyedLocks<i64>,
}

impl PaginationController {
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        photos: Arc<dyn PhotoRepository>,
        search: Arc<dyn PhotoSearchPort>,
        per_page: u32,
    ) -> Self {
        Self {
            locations,
            photos,
            search,
            per_page,
            locks: KeyedLocks::new(),
        }
    }

    /// Hold the location's lock, excluding any fetch or advance on it.
    pub async fn lock_location(&self, location_id: i64) -> OwnedMutexGuard<()> {
        self.locks.lock(&location_id).await
    }

    /// Search the location's current page and replace its photo set.
    ///
    /// On a failed search nothing is written.
    pub async fn fetch_current(
        &self,
        location_id: i64,
    ) -> Result<ProvisionedPage, ProvisioningError> {
        let _guard = self.locks.lock(&location_id).await;

        let location = self.locations.get_by_id(location_id).await?;
        let previous = self.photos.list_for_location(location_id).await?;

        let mut page = self
            .search_and_apply(&location, location.cursor.current_page)
            .await?;

        let kept: HashSet<&str> = page.photos.iter().map(|p| p.source_url.as_str()).collect();
        page.displaced = previous
            .into_iter()
            .filter(|p| !kept.contains(p.source_url.as_str()))
            .collect();
        Ok(page)
    }

    /// Move the location to its next page, wrapping past the last one.
    ///
    /// The current photos are deleted first. If the search then fails the
    /// location is left with no photos and its cursor unchanged.
    pub async fn advance(&self, location_id: i64) -> Result<Advance, ProvisioningError> {
        let _guard = self.locks.lock(&location_id).await;

        let location = self.locations.get_by_id(location_id).await?;
        let next = location.cursor.next_page();
        debug!(
            location_id,
            from = location.cursor.current_page,
            to = next,
            total = location.cursor.total_pages,
            "Advancing page"
        );

        let removed = self.photos.delete_for_location(location_id).await?;
        let result = self.search_and_apply(&location, next).await;

        Ok(Advance { removed, result })
    }

    async fn search_and_apply(
        &self,
        location: &Location,
        page: u32,
    ) -> Result<ProvisionedPage, ProvisioningError> {
        let request = SearchRequest::new(location.coordinate, page, self.per_page);
        let result = self.search.search(&request).await;

        if !result.is_success() {
            warn!(
                location_id = location.id,
                page,
                outcome = %result.outcome,
                detail = result.detail.as_deref().unwrap_or_default(),
                "Photo search failed"
            );
            return Err(ProvisioningError::SearchFailed {
                outcome: result.outcome,
                detail: result.detail.unwrap_or_default(),
            });
        }

        let SearchResult {
            page: reported_page,
            total_pages,
            items,
            ..
        } = result;
        let cursor = PageCursor::normalized(reported_page, total_pages);
        let new_photos = photos_from_items(items);

        // Fails with NotFound if the location was deleted during the search
        let photos = self
            .locations
            .replace_page(location.id, cursor, &new_photos)
            .await?;

        info!(
            location_id = location.id,
            page = cursor.current_page,
            total_pages = cursor.total_pages,
            count = photos.len(),
            "Stored photo page"
        );

        Ok(ProvisionedPage {
            location_id: location.id,
            cursor,
            photos,
            displaced: Vec::new(),
        })
    }
}

/// Items without a usable source URL are skipped; a missing title becomes empty.
fn photos_from_items(items: Vec<SearchItem>) -> Vec<NewPhoto> {
    items
        .into_iter()
        .filter_map(|item| {
            let url = item.source_url.filter(|u| !u.trim().is_empty())?;
            Some(NewPhoto::new(item.title.unwrap_or_default(), url))
        })
        .collect()
}
