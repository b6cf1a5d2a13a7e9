//! Search functionality for the Flickr client.

use geoalbum_core::SearchRequest;
use tracing::debug;

use crate::error::FlickrResult;
use crate::http::HttpBackend;
use crate::models::FlickrPhotoPage;
use crate::parsing::parse_search_response;
use crate::url::{build_search_url, redact_api_key};

use super::FlickrClient;

impl<B: HttpBackend> FlickrClient<B> {
    /// Fetch one page of `flickr.photos.search` around a coordinate.
    ///
    /// Exactly one GET is issued, unless the base URL is malformed, in
    /// which case none is.
    pub(crate) async fn search_photos(
        &self,
        request: &SearchRequest,
    ) -> FlickrResult<FlickrPhotoPage> {
        let url = build_search_url(&self.config, request)?;
        debug!(url = %redact_api_key(&url), page = request.page, "Searching photos");

        let body = self.backend.get_bytes(&url).await?;
        let page = parse_search_response(&body)?;
        debug!(
            page = page.page,
            pages = page.pages,
            per_page = page.per_page,
            photos = page.photos.len(),
            "Decoded search page"
        );
        Ok(page)
    }
}
