//! Image download for the Flickr client.

use bytes::Bytes;
use tracing::debug;

use crate::error::{FlickrError, FlickrResult};
use crate::http::HttpBackend;
use crate::url::parse_http_url;

use super::FlickrClient;

impl<B: HttpBackend> FlickrClient<B> {
    /// Download the image at `url` with a single GET.
    ///
    /// A 2xx response with an empty body is an error; there is nothing to cache.
    pub(crate) async fn fetch_image(&self, url: &str) -> FlickrResult<Bytes> {
        let url = parse_http_url(url)?;
        let bytes = self.backend.get_bytes(&url).await?;
        if bytes.is_empty() {
            return Err(FlickrError::EmptyBody);
        }

        debug!(url = %url, size = bytes.len(), "Downloaded image");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_config;
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};

    #[tokio::test]
    async fn test_fetch_image_returns_bytes() {
        let backend = FakeBackend::new().with_response("a.jpg", CannedResponse::text("JPEG"));
        let client = FlickrClient::with_backend(test_config(), backend);

        let bytes = client.fetch_image("https://live.test/a.jpg").await.unwrap();
        assert_eq!(bytes, "JPEG");
    }

    #[tokio::test]
    async fn test_fetch_image_rejects_empty_body() {
        let backend = FakeBackend::new().with_default(CannedResponse::Body(Bytes::new()));
        let client = FlickrClient::with_backend(test_config(), backend);

        let result = client.fetch_image("https://live.test/a.jpg").await;
        assert!(matches!(result, Err(FlickrError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_fetch_image_rejects_malformed_url() {
        let backend = FakeBackend::new().with_default(CannedResponse::text("JPEG"));
        let client = FlickrClient::with_backend(test_config(), backend.clone());

        let result = client.fetch_image("ftp://live.test/a.jpg").await;
        assert!(matches!(result, Err(FlickrError::InvalidUrl { .. })));
        assert!(backend.requests().is_empty());
    }
}
