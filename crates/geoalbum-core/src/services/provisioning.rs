//! Photo provisioning service - the API adapters use to manage locations and photos.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};

use super::pagination::{Advance, PaginationController, ProvisionedPage};
use super::ProvisioningError;
use crate::cache::PhotoCache;
use crate::domain::{Coordinate, Location, Photo};
use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, CoreError, PhotoSearchPort, Repos, RepositoryError};

/// Photos requested per search page unless configured otherwise.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Tunables for provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisioningConfig {
    pub per_page: u32,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ProvisioningConfig {
    /// Set the page size. Zero is raised to 1.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }
}

/// Orchestrates locations, pagination, the photo cache and event emission.
///
/// Every failed search emits exactly one `AppEvent::PhotosFetchFailed` and is
/// also returned to the caller.
pub struct PhotoProvisioningService {
    repos: Repos,
    pagination: PaginationController,
    cache: Arc<PhotoCache>,
    emitter: Arc<dyn AppEventEmitter>,
}

impl PhotoProvisioningService {
    pub fn new(
        repos: Repos,
        search: Arc<dyn PhotoSearchPort>,
        cache: Arc<PhotoCache>,
        emitter: Arc<dyn AppEventEmitter>,
        config: ProvisioningConfig,
    ) -> Self {
        let pagination = PaginationController::new(
            Arc::clone(&repos.locations),
            Arc::clone(&repos.photos),
            search,
            config.per_page,
        );
        Self {
            repos,
            pagination,
            cache,
            emitter,
        }
    }

    /// Access the photo cache.
    pub fn cache(&self) -> &PhotoCache {
        &self.cache
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Locations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a location at `coordinate`, or return the one already there.
    pub async fn place_location(&self, coordinate: Coordinate) -> Result<Location, CoreError> {
        if !coordinate.is_valid() {
            return Err(ProvisioningError::InvalidCoordinate(coordinate).into());
        }

        if let Some(existing) = self.repos.locations.find_by_coordinate(coordinate).await? {
            debug!(location_id = existing.id, %coordinate, "Location already placed");
            return Ok(existing);
        }

        match self.repos.locations.insert(coordinate).await {
            Ok(location) => {
                info!(location_id = location.id, %coordinate, "Placed location");
                Ok(location)
            }
            // Lost a race with another placement at the same point
            Err(RepositoryError::AlreadyExists(_)) => self
                .repos
                .locations
                .find_by_coordinate(coordinate)
                .await?
                .ok_or_else(|| {
                    CoreError::Repository(RepositoryError::NotFound(coordinate.to_string()))
                }),
            Err(e) => Err(e.into()),
        }
    }

    /// List all locations, oldest first.
    pub async fn list_locations(&self) -> Result<Vec<Location>, CoreError> {
        Ok(self.repos.locations.list().await?)
    }

    /// Get a location by ID.
    pub async fn get_location(&self, location_id: i64) -> Result<Location, CoreError> {
        Ok(self.repos.locations.get_by_id(location_id).await?)
    }

    /// Delete a location, its photos and their cached images.
    pub async fn delete_location(&self, location_id: i64) -> Result<Location, CoreError> {
        let _guard = self.pagination.lock_location(location_id).await;
        let location = self.repos.locations.get_by_id(location_id).await?;
        let photos = self.repos.photos.list_for_location(location_id).await?;

        self.repos.locations.delete(location_id).await?;
        self.evict_all(&photos).await;

        info!(location_id, photos = photos.len(), "Removed location");
        self.emitter.emit(AppEvent::location_removed(location_id));
        Ok(location)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pages
    // ─────────────────────────────────────────────────────────────────────────

    /// Make sure a location has photos, fetching its current page only if it has none.
    pub async fn provision(&self, location_id: i64) -> Result<Vec<Photo>, CoreError> {
        let location = self.repos.locations.get_by_id(location_id).await?;
        if location.has_photos() {
            return Ok(self.repos.photos.list_for_location(location_id).await?);
        }
        Ok(self.fetch_for_location(location_id).await?.photos)
    }

    /// Fetch the location's current page, replacing its photos.
    pub async fn fetch_for_location(&self, location_id: i64) -> Result<ProvisionedPage, CoreError> {
        let result = self.pagination.fetch_current(location_id).await;
        if let Ok(page) = &result {
            self.evict_all(&page.displaced).await;
        }
        self.finish(result)
    }

    /// Rotate the location to its next page.
    pub async fn advance_page(&self, location_id: i64) -> Result<ProvisionedPage, CoreError> {
        let Advance { removed, result } = self.pagination.advance(location_id).await?;
        self.evict_all(&removed).await;
        self.finish(result)
    }

    /// List a location's photos in search result order.
    pub async fn photos_for_location(&self, location_id: i64) -> Result<Vec<Photo>, CoreError> {
        // Distinguish "no photos" from "no such location"
        self.repos.locations.get_by_id(location_id).await?;
        Ok(self.repos.photos.list_for_location(location_id).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Photos
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a photo record by ID.
    pub async fn get_photo(&self, photo_id: i64) -> Result<Photo, CoreError> {
        Ok(self.repos.photos.get_by_id(photo_id).await?)
    }

    /// Delete a single photo and its cached image.
    pub async fn delete_photo(&self, photo_id: i64) -> Result<Photo, CoreError> {
        let photo = self.repos.photos.get_by_id(photo_id).await?;
        let _guard = self.pagination.lock_location(photo.location_id).await;
        self.repos.photos.delete(photo_id).await?;
        self.cache.evict(&photo.source_url).await;

        info!(photo_id, location_id = photo.location_id, "Removed photo");
        self.emitter
            .emit(AppEvent::photo_removed(photo_id, photo.location_id));
        Ok(photo)
    }

    /// Get the image bytes for a photo through the cache.
    ///
    /// Returns `Ok(None)` if the image could not be fetched.
    pub async fn image_for_photo(&self, photo_id: i64) -> Result<Option<Bytes>, CoreError> {
        let photo = self.repos.photos.get_by_id(photo_id).await?;
        let bytes = self.cache.get(&photo.source_url).await;

        // The photo may have been removed while its image was in flight
        if let Err(e) = self.repos.photos.get_by_id(photo_id).await {
            if matches!(e, RepositoryError::NotFound(_)) {
                self.cache.evict(&photo.source_url).await;
            }
            return Err(e.into());
        }
        Ok(bytes)
    }

    fn finish(
        &self,
        result: Result<ProvisionedPage, ProvisioningError>,
    ) -> Result<ProvisionedPage, CoreError> {
        match result {
            Ok(page) => {
                self.emitter.emit(AppEvent::photos_provisioned(
                    page.location_id,
                    page.cursor.current_page,
                    page.cursor.total_pages,
                    page.photos.len(),
                ));
                Ok(page)
            }
            Err(e) => {
                if e.is_search_failure() {
                    self.emitter.emit(AppEvent::PhotosFetchFailed);
                }
                Err(e.into())
            }
        }
    }

    async fn evict_all(&self, photos: &[Photo]) {
        for photo in photos {
            self.cache.evict(&photo.source_url).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageCursor;
    use crate::events::EventBroadcaster;
    use crate::ports::image_fetcher::MockImageFetcherPort;
    use crate::ports::search::MockPhotoSearchPort;
    use crate::ports::{
        ImageFetchError, ImageFetcherPort, NoopEmitter, PhotoRepository, SearchOutcome,
        SearchResult,
    };
    use async_trait::async_trait;
    use crate::services::test_support::{InMemoryStore, items};
    use tempfile::TempDir;
    use tokio::sync::broadcast::Receiver;

    struct Harness {
        service: PhotoProvisioningService,
        store: Arc<InMemoryStore>,
        events: Receiver<AppEvent>,
        cache_dir: TempDir,
    }

    fn harness(search: MockPhotoSearchPort, fetcher: MockImageFetcherPort) -> Harness {
        let store = InMemoryStore::new();
        let cache_dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(PhotoCache::new(cache_dir.path(), Arc::new(fetcher)));
        let broadcaster = EventBroadcaster::new();
        let events = broadcaster.subscribe();
        let service = PhotoProvisioningService::new(
            store.repos(),
            Arc::new(search),
            cache,
            Arc::new(broadcaster),
            ProvisioningConfig::default(),
        );
        Harness {
            service,
            store,
            events,
            cache_dir,
        }
    }

    fn failing_search() -> MockPhotoSearchPort {
        let mut search = MockPhotoSearchPort::new();
        search.expect_search().returning(|req| {
            SearchResult::failure(SearchOutcome::InvalidRequest, req.page, "status 500")
        });
        search
    }

    fn drain(events: &mut Receiver<AppEvent>) -> Vec<AppEvent> {
        std::iter::from_fn(|| events.try_recv().ok()).collect()
    }

    #[tokio::test]
    async fn test_place_location_is_idempotent() {
        let mut h = harness(MockPhotoSearchPort::new(), MockImageFetcherPort::new());
        let point = Coordinate::new(37.7749, -122.4194);

        let first = h.service.place_location(point).await.unwrap();
        let second = h.service.place_location(point).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.cursor, PageCursor::INITIAL);
        assert!(!first.has_photos());
        assert_eq!(h.service.list_locations().await.unwrap().len(), 1);
        assert!(drain(&mut h.events).is_empty());
    }

    #[tokio::test]
    async fn test_place_location_rejects_invalid_coordinate() {
        let h = harness(MockPhotoSearchPort::new(), MockImageFetcherPort::new());
        let err = h
            .service
            .place_location(Coordinate::new(120.0, 0.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provisioning(ProvisioningError::InvalidCoordinate(_))
        ));
    }

    #[tokio::test]
    async fn test_provision_fetches_only_when_empty() {
        let mut search = MockPhotoSearchPort::new();
        search
            .expect_search()
            .times(1)
            .returning(|req| SearchResult::success(req.page, 4, items(req.page, 3)));
        let mut h = harness(search, MockImageFetcherPort::new());

        let location = h
            .service
            .place_location(Coordinate::new(1.0, 2.0))
            .await
            .unwrap();
        assert_eq!(h.service.provision(location.id).await.unwrap().len(), 3);
        // Second call reads from storage; the mock allows one search only
        assert_eq!(h.service.provision(location.id).await.unwrap().len(), 3);

        assert_eq!(
            drain(&mut h.events),
            vec![AppEvent::photos_provisioned(location.id, 1, 4, 3)]
        );
    }

    #[tokio::test]
    async fn test_search_failure_emits_one_event_and_keeps_state() {
        let mut h = harness(failing_search(), MockImageFetcherPort::new());
        let id = h.store.seed(PageCursor::INITIAL, 0);

        let err = h.service.fetch_for_location(id).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Provisioning(ProvisioningError::SearchFailed { .. })
        ));
        assert_eq!(drain(&mut h.events), vec![AppEvent::PhotosFetchFailed]);
        assert_eq!(h.store.photo_count(id), 0);
        assert_eq!(h.store.cursor(id), Some(PageCursor::INITIAL));
    }

    #[tokio::test]
    async fn test_failed_advance_evicts_removed_photos() {
        let mut fetcher = MockImageFetcherPort::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok(Bytes::from_static(b"img")));
        let mut h = harness(failing_search(), fetcher);
        let id = h.store.seed(
            PageCursor {
                current_page: 2,
                total_pages: 3,
            },
            5,
        );

        let photos = h.service.photos_for_location(id).await.unwrap();
        for photo in &photos {
            h.service.image_for_photo(photo.id).await.unwrap().unwrap();
        }

        assert!(h.service.advance_page(id).await.is_err());

        for photo in &photos {
            assert!(!h.service.cache().contains(&photo.source_url).await);
        }
        assert!(h.service.photos_for_location(id).await.unwrap().is_empty());
        assert_eq!(h.store.cursor(id).unwrap().current_page, 2);
        assert_eq!(drain(&mut h.events), vec![AppEvent::PhotosFetchFailed]);
        assert_eq!(std::fs::read_dir(h.cache_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_delete_photo_evicts_cache() {
        let mut fetcher = MockImageFetcherPort::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|_| Ok(Bytes::from_static(b"img")));
        let mut h = harness(MockPhotoSearchPort::new(), fetcher);
        let id = h.store.seed(PageCursor::INITIAL, 1);
        let photo = h.service.photos_for_location(id).await.unwrap().remove(0);

        h.service.image_for_photo(photo.id).await.unwrap();
        h.service.delete_photo(photo.id).await.unwrap();

        assert!(!h.service.cache().contains(&photo.source_url).await);
        assert_eq!(h.store.photo_count(id), 0);
        assert_eq!(
            drain(&mut h.events),
            vec![AppEvent::photo_removed(photo.id, id)]
        );
        // Evicted entries are fetched again
        assert!(h.service.cache().get(&photo.source_url).await.is_some());
    }

    /// Fetcher that deletes the photo while its image is being fetched.
    struct DeletingFetcher {
        store: Arc<InMemoryStore>,
        photo_id: std::sync::OnceLock<i64>,
    }

    #[async_trait]
    impl ImageFetcherPort for DeletingFetcher {
        async fn fetch(&self, url: &str) -> Result<Bytes, ImageFetchError> {
            if let Some(id) = self.photo_id.get() {
                PhotoRepository::delete(self.store.as_ref(), *id).await.unwrap();
            }
            Ok(Bytes::from(url.as_bytes().to_vec()))
        }
    }

    #[tokio::test]
    async fn test_image_for_photo_deleted_mid_fetch_leaves_no_entry() {
        let store = InMemoryStore::new();
        let cache_dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(DeletingFetcher {
            store: store.clone(),
            photo_id: std::sync::OnceLock::new(),
        });
        let cache = Arc::new(PhotoCache::new(cache_dir.path(), fetcher.clone()));
        let service = PhotoProvisioningService::new(
            store.repos(),
            Arc::new(MockPhotoSearchPort::new()),
            cache,
            Arc::new(NoopEmitter::new()),
            ProvisioningConfig::default(),
        );
        let id = store.seed(PageCursor::INITIAL, 1);
        let photo = service.photos_for_location(id).await.unwrap().remove(0);
        fetcher.photo_id.set(photo.id).unwrap();

        let result = service.image_for_photo(photo.id).await;

        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
        assert!(!service.cache().contains(&photo.source_url).await);
        assert_eq!(service.cache().memory_len(), 0);
        let leftovers = std::fs::read_dir(cache_dir.path())
            .map(|dir| dir.count())
            .unwrap_or(0);
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_delete_location_waits_for_location_lock() {
        let h = harness(MockPhotoSearchPort::new(), MockImageFetcherPort::new());
        let id = h.store.seed(PageCursor::INITIAL, 2);

        let guard = h.service.pagination.lock_location(id).await;
        let blocked = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            h.service.delete_location(id),
        )
        .await;
        assert!(blocked.is_err());
        assert_eq!(h.store.photo_count(id), 2);

        drop(guard);
        h.service.delete_location(id).await.unwrap();
        assert_eq!(h.store.photo_count(id), 0);
    }

    #[tokio::test]
    async fn test_delete_location_cascades() {
        let mut h = harness(MockPhotoSearchPort::new(), MockImageFetcherPort::new());
        let id = h.store.seed(PageCursor::INITIAL, 3);

        h.service.delete_location(id).await.unwrap();

        assert_eq!(h.store.photo_count(id), 0);
        assert!(matches!(
            h.service.get_location(id).await,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
        assert_eq!(drain(&mut h.events), vec![AppEvent::location_removed(id)]);
    }

    #[tokio::test]
    async fn test_image_for_missing_photo_is_not_found() {
        let h = harness(MockPhotoSearchPort::new(), MockImageFetcherPort::new());
        assert!(matches!(
            h.service.image_for_photo(9).await,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(ProvisioningConfig::default().per_page, 25);
        assert_eq!(ProvisioningConfig::default().with_per_page(0).per_page, 1);
    }
}
