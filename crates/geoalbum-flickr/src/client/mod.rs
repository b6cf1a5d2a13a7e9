//! Flickr client for photo search and image download.
//!
//! This module provides the main client interface for interacting with
//! the Flickr REST API and the static image hosts it links to.

mod image;
mod search;

use crate::config::FlickrClientConfig;
use crate::error::FlickrResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::FlickrConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Flickr client using the reqwest HTTP backend.
pub type DefaultFlickrClient = FlickrClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Flickr photo search API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultFlickrClient` for production code; it implements both
/// `PhotoSearchPort` and `ImageFetcherPort`.
pub struct FlickrClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: FlickrConfig,
}

impl DefaultFlickrClient {
    /// Create a new client with the given configuration.
    ///
    /// The base URL is not validated here. A malformed one makes every
    /// search fail as an invalid request without touching the network.
    pub fn new(config: &FlickrClientConfig) -> FlickrResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: FlickrConfig {
                base_url: config.base_url.clone(),
                api_key: config.api_key.clone(),
            },
        })
    }
}

impl<B: HttpBackend> FlickrClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: FlickrConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
