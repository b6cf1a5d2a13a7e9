//! Cache key derivation.
//!
//! A photo's cache key doubles as the file name of its durable entry, so it
//! must be stable for a given source URL and safe to use as a path component.

use sha2::{Digest, Sha256};

/// Derive the cache key for a photo source URL.
///
/// Uses the last non-empty path segment when it is a safe file name
/// (`[A-Za-z0-9._-]`, not `.` or `..`). Anything else falls back to the
/// lowercase hex SHA-256 of the full URL. Query strings and fragments are
/// ignored when picking the segment.
pub fn derive_cache_key(source_url: &str) -> String {
    last_path_segment(source_url)
        .filter(|segment| is_safe_file_name(segment))
        .map_or_else(|| sha256_hex(source_url), ToString::to_string)
}

fn last_path_segment(url: &str) -> Option<&str> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let without_query = &url[..end];

    // Skip the authority so a bare host is never taken for a file name
    let path = match without_query.find("://") {
        Some(idx) => {
            let rest = &without_query[idx + 3..];
            rest.find('/').map_or("", |slash| &rest[slash..])
        }
        None => without_query,
    };

    path.rsplit('/').find(|segment| !segment.is_empty())
}

fn is_safe_file_name(segment: &str) -> bool {
    segment != "."
        && segment != ".."
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
