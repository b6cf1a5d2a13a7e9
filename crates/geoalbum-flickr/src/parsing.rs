//! JSON parsing for Flickr API responses.
//!
//! Sync functions that turn a raw response body into typed values. The
//! classification order is: empty body, non-JSON, `stat != "ok"`, missing
//! page fields.

use serde_json::Value;

use crate::error::{FlickrError, FlickrResult};
use crate::models::{FlickrPhoto, FlickrPhotoPage};

/// Parse a `flickr.photos.search` response body.
pub fn parse_search_response(body: &[u8]) -> FlickrResult<FlickrPhotoPage> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FlickrError::EmptyBody);
    }

    let json: Value = serde_json::from_slice(body)?;

    let stat = json.get("stat").and_then(Value::as_str);
    if stat != Some("ok") {
        return Err(FlickrError::ApiFailure {
            code: json.get("code").and_then(Value::as_i64).unwrap_or(0),
            message: json
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(
                    || format!("stat is {}", stat.unwrap_or("missing")),
                    String::from,
                ),
        });
    }

    let photos = json
        .get("photos")
        .filter(|p| p.is_object())
        .ok_or_else(|| missing("photos"))?;

    let page = required_u32(photos, "page")?;
    let per_page = required_u32(photos, "perpage")?;
    let pages = required_u32(photos, "pages")?;
    let entries = photos
        .get("photo")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("photos.photo"))?;

    Ok(FlickrPhotoPage {
        page,
        pages,
        per_page,
        photos: entries.iter().map(parse_photo).collect(),
    })
}

/// Parse one `photos.photo` entry. Unknown or mistyped fields become `None`.
pub fn parse_photo(json: &Value) -> FlickrPhoto {
    FlickrPhoto {
        id: json.get("id").and_then(Value::as_str).map(String::from),
        title: json.get("title").and_then(Value::as_str).map(String::from),
        url_s: json
            .get("url_s")
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
            .map(String::from),
    }
}

// Flickr sends some counters as strings
fn required_u32(json: &Value, field: &str) -> FlickrResult<u32> {
    let value = json
        .get(field)
        .ok_or_else(|| missing(&format!("photos.{field}")))?;

    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| FlickrError::InvalidResponse {
        message: format!("photos.{field} is not a page number: {value}"),
    })
}

fn missing(field: &str) -> FlickrError {
    FlickrError::InvalidResponse {
        message: format!("missing field '{field}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: &Value) -> Vec<u8> {
        serde_json::to_vec(value).unwrap()
    }

    #[test]
    fn test_parse_ok_page() {
        let page = parse_search_response(&body(&json!({
            "stat": "ok",
            "photos": {
                "page": 2,
                "pages": "40",
                "perpage": 25,
                "total": "1000",
                "photo": [
                    {"id": "1", "title": "Lake", "url_s": "http://x/a.jpg"},
                    {"id": "2", "title": "No size"},
                    {"id": "3", "url_s": "http://x/c.jpg"}
                ]
            }
        })))
        .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 40);
        assert_eq!(page.per_page, 25);
        assert_eq!(page.photos.len(), 3);
        assert_eq!(page.photos[0].title.as_deref(), Some("Lake"));
        assert!(page.photos[1].url_s.is_none());
        assert!(page.photos[2].title.is_none());
    }

    #[test]
    fn test_empty_body() {
        assert!(matches!(parse_search_response(b""), Err(FlickrError::EmptyBody)));
        assert!(matches!(parse_search_response(b"  \n"), Err(FlickrError::EmptyBody)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_search_response(b"{\"stat\": \"ok\", "),
            Err(FlickrError::JsonParse(_))
        ));
        assert!(matches!(
            parse_search_response(b"jsonFlickrApi({})"),
            Err(FlickrError::JsonParse(_))
        ));
    }

    #[test]
    fn test_stat_fail() {
        let result = parse_search_response(&body(&json!({
            "stat": "fail",
            "code": 100,
            "message": "Invalid API Key (Key has invalid format)"
        })));
        assert!(matches!(
            result,
            Err(FlickrError::ApiFailure { code: 100, .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        for value in [
            json!({"stat": "ok"}),
            json!({"stat": "ok", "photos": {"page": 1, "pages": 1, "photo": []}}),
            json!({"stat": "ok", "photos": {"page": 1, "perpage": 25, "pages": 1}}),
            json!({"stat": "ok", "photos": {"page": "x", "perpage": 25, "pages": 1, "photo": []}}),
        ] {
            assert!(
                matches!(
                    parse_search_response(&body(&value)),
                    Err(FlickrError::InvalidResponse { .. })
                ),
                "{value} should be invalid"
            );
        }
    }

    #[test]
    fn test_zero_pages_is_accepted() {
        let page = parse_search_response(&body(&json!({
            "stat": "ok",
            "photos": {"page": 1, "pages": 0, "perpage": 25, "total": 0, "photo": []}
        })))
        .unwrap();
        assert_eq!(page.pages, 0);
        assert!(page.photos.is_empty());
    }
}
