//! URL construction helpers for the Flickr API.

use geoalbum_core::SearchRequest;
use url::Url;

use crate::error::{FlickrError, FlickrResult};
use crate::models::FlickrConfig;

/// REST method for geo search.
const SEARCH_METHOD: &str = "flickr.photos.search";

/// Extra fields requested per photo.
const EXTRAS: &str = "url_s";

/// Parse an absolute http(s) URL that can carry a path and query.
pub fn parse_http_url(raw: &str) -> FlickrResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| FlickrError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(FlickrError::InvalidUrl {
            url: raw.to_string(),
            message: "expected an http or https URL".to_string(),
        });
    }
    Ok(url)
}

/// Build the search URL. Every value is percent-encoded.
pub fn build_search_url(config: &FlickrConfig, request: &SearchRequest) -> FlickrResult<Url> {
    let mut url = parse_http_url(&config.base_url)?;

    let params: [(&str, String); 9] = [
        ("method", SEARCH_METHOD.to_string()),
        ("api_key", config.api_key.clone()),
        ("format", "json".to_string()),
        ("nojsoncallback", "1".to_string()),
        ("lat", request.latitude.to_string()),
        ("lon", request.longitude.to_string()),
        ("extras", EXTRAS.to_string()),
        ("page", request.page.to_string()),
        ("per_page", request.per_page.to_string()),
    ];

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    url.set_query(Some(&query));

    Ok(url)
}

/// Render a URL for logs with the API key replaced.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == "api_key") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
