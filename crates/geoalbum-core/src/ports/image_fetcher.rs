//! Image fetcher port.
//!
//! The photo cache is the only consumer and treats every failure the same
//! way, so there is a single error variant carrying a description.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Any failure to obtain image bytes (malformed URL, transport, status, empty body).
#[derive(Debug, Clone, Error)]
#[error("Image fetch failed: {message}")]
pub struct ImageFetchError {
    pub message: String,
}

impl ImageFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for fetching raw image bytes by URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcherPort: Send + Sync {
    /// Fetch the bytes at `url` with a single request.
    async fn fetch(&self, url: &str) -> Result<Bytes, ImageFetchError>;
}
