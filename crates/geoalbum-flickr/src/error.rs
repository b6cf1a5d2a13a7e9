//! Error types for Flickr operations.
//!
//! Request errors stay inside `geoalbum-flickr`; the port implementations
//! map them to `SearchOutcome` and `ImageFetchError` at the boundary.

use thiserror::Error;

/// Result type alias for Flickr operations.
pub type FlickrResult<T> = Result<T, FlickrError>;

/// Errors related to Flickr API operations.
#[derive(Debug, Error)]
pub enum FlickrError {
    /// A URL could not be parsed or cannot carry a query. No request was sent.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        message: String,
    },

    /// Transport failure, including timeouts and client construction.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a status outside 200-299.
    #[error("Flickr request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested, API key redacted
        url: String,
    },

    /// The server answered 2xx without a body.
    #[error("Empty response body")]
    EmptyBody,

    /// The body is not JSON.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The API reported `stat != "ok"`.
    #[error("Flickr API error {code}: {message}")]
    ApiFailure {
        /// Flickr error code, 0 if absent
        code: i64,
        /// Flickr error message
        message: String,
    },

    /// JSON was valid but a required field is missing or malformed.
    #[error("Invalid response from Flickr API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_message() {
        let error = FlickrError::ApiRequestFailed {
            status: 503,
            url: "https://api.flickr.com/services/rest/?api_key=REDACTED".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("REDACTED"));
    }

    #[test]
    fn test_api_failure_message() {
        let error = FlickrError::ApiFailure {
            code: 100,
            message: "Invalid API Key".to_string(),
        };
        assert!(error.to_string().contains("Invalid API Key"));
    }
}
