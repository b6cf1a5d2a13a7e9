//! `SQLite` implementation of the `PhotoRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use geoalbum_core::{Photo, PhotoRepository, RepositoryError};

use super::row_mappers::{PHOTO_SELECT_COLUMNS, map_sqlx_error, row_to_photo};

/// `SQLite` implementation of the `PhotoRepository` trait.
pub struct SqlitePhotoRepository {
    pool: SqlitePool,
}

impl SqlitePhotoRepository {
    /// Create a new `SQLite` photo repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for SqlitePhotoRepository {
    async fn list_for_location(&self, location_id: i64) -> Result<Vec<Photo>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {PHOTO_SELECT_COLUMNS} FROM photos WHERE location_id = ? ORDER BY id"
        ))
        .bind(location_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_photo).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Photo, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {PHOTO_SELECT_COLUMNS} FROM photos WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| RepositoryError::NotFound(format!("photo {id}")))?;

        row_to_photo(&row)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("photo {id}")));
        }
        Ok(())
    }

    async fn delete_for_location(&self, location_id: i64) -> Result<Vec<Photo>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let rows = sqlx::query(&format!(
            "SELECT {PHOTO_SELECT_COLUMNS} FROM photos WHERE location_id = ? ORDER BY id"
        ))
        .bind(location_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;
        let removed = rows
            .iter()
            .map(row_to_photo)
            .collect::<Result<Vec<_>, _>>()?;

        sqlx::query("DELETE FROM photos WHERE location_id = ?")
            .bind(location_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(removed)
    }
}
