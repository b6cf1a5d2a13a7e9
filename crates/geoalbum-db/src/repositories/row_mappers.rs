//! Row mapping helpers for `SQLite` queries.

use geoalbum_core::{Coordinate, Location, PageCursor, Photo, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT for location queries, including the derived photo count.
pub const LOCATION_SELECT: &str = "SELECT l.id, l.latitude, l.longitude, l.current_page, l.total_pages, l.created_at, \
     (SELECT COUNT(*) FROM photos p WHERE p.location_id = l.id) AS photo_count \
     FROM locations l";

/// Shared SELECT column list for photo queries.
pub const PHOTO_SELECT_COLUMNS: &str = "id, location_id, title, source_url, created_at";

/// Map `SQLx` errors to `RepositoryError`.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        return RepositoryError::AlreadyExists(msg);
    }
    if msg.contains("FOREIGN KEY constraint failed") || msg.contains("CHECK constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Parse a row selected with `LOCATION_SELECT` into a Location.
pub fn row_to_location(row: &SqliteRow) -> Result<Location, RepositoryError> {
    let photo_count: i64 = row.try_get("photo_count").map_err(storage)?;

    Ok(Location {
        id: row.try_get("id").map_err(storage)?,
        coordinate: Coordinate::new(
            row.try_get("latitude").map_err(storage)?,
            row.try_get("longitude").map_err(storage)?,
        ),
        cursor: PageCursor {
            current_page: row.try_get("current_page").map_err(storage)?,
            total_pages: row.try_get("total_pages").map_err(storage)?,
        },
        photo_count: u32::try_from(photo_count).unwrap_or(u32::MAX),
        created_at: row.try_get("created_at").map_err(storage)?,
    })
}

/// Parse a row selected with `PHOTO_SELECT_COLUMNS` into a Photo.
pub fn row_to_photo(row: &SqliteRow) -> Result<Photo, RepositoryError> {
    Ok(Photo {
        id: row.try_get("id").map_err(storage)?,
        location_id: row.try_get("location_id").map_err(storage)?,
        title: row.try_get("title").map_err(storage)?,
        source_url: row.try_get("source_url").map_err(storage)?,
        created_at: row.try_get("created_at").map_err(storage)?,
    })
}
