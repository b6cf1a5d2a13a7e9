//! Port trait implementations for `FlickrClient`.
//!
//! This module implements the core-owned `PhotoSearchPort` and
//! `ImageFetcherPort` traits, converting internal errors into the
//! outcome classification the services expect.

use async_trait::async_trait;
use bytes::Bytes;
use geoalbum_core::{
    ImageFetchError, ImageFetcherPort, PhotoSearchPort, SearchItem, SearchOutcome, SearchRequest,
    SearchResult,
};
use tracing::{debug, warn};

use crate::client::FlickrClient;
use crate::error::FlickrError;
use crate::http::HttpBackend;
use crate::models::{FlickrPhoto, FlickrPhotoPage};

// ============================================================================
// Error Mapping
// ============================================================================

/// Classify an internal error as a search outcome.
const fn classify(err: &FlickrError) -> SearchOutcome {
    match err {
        FlickrError::InvalidUrl { .. }
        | FlickrError::Network(_)
        | FlickrError::ApiRequestFailed { .. } => SearchOutcome::InvalidRequest,
        FlickrError::EmptyBody => SearchOutcome::NoData,
        FlickrError::JsonParse(_)
        | FlickrError::ApiFailure { .. }
        | FlickrError::InvalidResponse { .. } => SearchOutcome::InvalidResponse,
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_search_item(photo: FlickrPhoto) -> SearchItem {
    if photo.url_s.is_none() {
        debug!(photo_id = photo.id.as_deref().unwrap_or("?"), "Photo has no url_s");
    }
    SearchItem {
        title: photo.title,
        source_url: photo.url_s,
    }
}

fn to_search_result(page: FlickrPhotoPage) -> SearchResult {
    let items = page.photos.into_iter().map(to_search_item).collect();
    SearchResult::success(page.page, page.pages, items)
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend + 'static> PhotoSearchPort for FlickrClient<B> {
    async fn search(&self, request: &SearchRequest) -> SearchResult {
        match self.search_photos(request).await {
            Ok(page) => to_search_result(page),
            Err(err) => {
                let outcome = classify(&err);
                warn!(
                    outcome = %outcome,
                    page = request.page,
                    error = %err,
                    "Photo search failed"
                );
                SearchResult::failure(outcome, request.page, err.to_string())
            }
        }
    }
}

#[async_trait]
impl<B: HttpBackend + 'static> ImageFetcherPort for FlickrClient<B> {
    async fn fetch(&self, url: &str) -> Result<Bytes, ImageFetchError> {
        self.fetch_image(url)
            .await
            .map_err(|e| ImageFetchError::new(e.to_string()))
    }
}
