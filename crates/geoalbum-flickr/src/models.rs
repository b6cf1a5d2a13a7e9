//! Internal types for the Flickr API.
//!
//! These types are internal to `geoalbum-flickr`. Consumers use the port
//! DTOs defined in `geoalbum-core`.

/// Internal configuration derived from `FlickrClientConfig`.
#[derive(Clone)]
pub struct FlickrConfig {
    /// Base URL, kept unparsed so a bad value fails per request
    pub base_url: String,
    pub api_key: String,
}

/// One decoded page of `flickr.photos.search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlickrPhotoPage {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub photos: Vec<FlickrPhoto>,
}

/// One entry of the `photos.photo` array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlickrPhoto {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Small-size image URL requested through `extras=url_s`
    pub url_s: Option<String>,
}
