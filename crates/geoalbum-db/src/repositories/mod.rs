//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_location_repository;
mod sqlite_photo_repository;

pub use sqlite_location_repository::SqliteLocationRepository;
pub use sqlite_photo_repository::SqlitePhotoRepository;
