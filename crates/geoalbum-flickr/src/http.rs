//! HTTP backend abstraction for the Flickr API.
//!
//! A trait-based backend allows dependency injection and easy testing.
//! The production implementation uses reqwest with a fixed per-request
//! timeout and no retries.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::config::FlickrClientConfig;
use crate::error::{FlickrError, FlickrResult};
use crate::url::redact_api_key;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can GET a URL.
///
/// This is an implementation detail - external code uses the core ports.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url` once and return the body of a 2xx response.
    ///
    /// Transport failures map to `FlickrError::Network` and other statuses to
    /// `FlickrError::ApiRequestFailed`.
    async fn get_bytes(&self, url: &Url) -> FlickrResult<Bytes>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &FlickrClientConfig) -> FlickrResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FlickrError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_bytes(&self, url: &Url) -> FlickrResult<Bytes> {
        debug!(url = %redact_api_key(url), "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FlickrError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlickrError::ApiRequestFailed {
                status: status.as_u16(),
                url: redact_api_key(url),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| FlickrError::Network(e.without_url().to_string()))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
