//! Public configuration for the Flickr client.

use std::time::Duration;

/// Flickr REST endpoint used unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://api.flickr.com/services/rest/";

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Flickr client.
///
/// # Example
///
/// ```
/// use geoalbum_flickr::FlickrClientConfig;
/// use std::time::Duration;
///
/// let config = FlickrClientConfig::new()
///     .with_api_key("0123456789abcdef")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Clone)]
pub struct FlickrClientConfig {
    /// Base URL of the REST endpoint
    pub(crate) base_url: String,
    /// Flickr API key, sent as `api_key`
    pub(crate) api_key: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; expiry counts as a transport failure
    pub(crate) timeout: Duration,
}

impl Default for FlickrClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            user_agent: concat!("geoalbum-flickr/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for FlickrClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlickrClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FlickrClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Flickr API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the base URL of the REST endpoint.
    ///
    /// Defaults to `https://api.flickr.com/services/rest/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key has been configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
