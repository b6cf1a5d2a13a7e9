//! Composition utilities for wiring core services to `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use geoalbum_core::Repos;

use crate::repositories::{SqliteLocationRepository, SqlitePhotoRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Self::location_repository(pool.clone()),
            Self::photo_repository(pool),
        )
    }

    /// Create a location repository from a pool.
    pub fn location_repository(pool: SqlitePool) -> Arc<SqliteLocationRepository> {
        Arc::new(SqliteLocationRepository::new(pool))
    }

    /// Create a photo repository from a pool.
    pub fn photo_repository(pool: SqlitePool) -> Arc<SqlitePhotoRepository> {
        Arc::new(SqlitePhotoRepository::new(pool))
    }
}
