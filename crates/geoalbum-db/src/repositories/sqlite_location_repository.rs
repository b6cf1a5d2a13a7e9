//! `SQLite` implementation of the `LocationRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use geoalbum_core::{
    Coordinate, Location, LocationRepository, NewPhoto, PageCursor, Photo, RepositoryError,
};

use super::row_mappers::{LOCATION_SELECT, map_sqlx_error, row_to_location};

/// `SQLite` implementation of the `LocationRepository` trait.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new `SQLite` location repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for SqliteLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, RepositoryError> {
        let rows = sqlx::query(&format!("{LOCATION_SELECT} ORDER BY l.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_location).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Location, RepositoryError> {
        let row = sqlx::query(&format!("{LOCATION_SELECT} WHERE l.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("location {id}")))?;

        row_to_location(&row)
    }

    async fn find_by_coordinate(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<Location>, RepositoryError> {
        let row = sqlx::query(&format!(
            "{LOCATION_SELECT} WHERE l.latitude = ? AND l.longitude = ?"
        ))
        .bind(coordinate.latitude)
        .bind(coordinate.longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_location).transpose()
    }

    async fn insert(&self, coordinate: Coordinate) -> Result<Location, RepositoryError> {
        let cursor = PageCursor::INITIAL;
        let result = sqlx::query(
            "INSERT INTO locations (latitude, longitude, current_page, total_pages, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(coordinate.latitude)
        .bind(coordinate.longitude)
        .bind(cursor.current_page)
        .bind(cursor.total_pages)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            RepositoryError::AlreadyExists(_) => {
                RepositoryError::AlreadyExists(format!("location at {coordinate}"))
            }
            other => other,
        })?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn replace_page(
        &self,
        id: i64,
        cursor: PageCursor,
        photos: &[NewPhoto],
    ) -> Result<Vec<Photo>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let updated =
            sqlx::query("UPDATE locations SET current_page = ?, total_pages = ? WHERE id = ?")
                .bind(cursor.current_page)
                .bind(cursor.total_pages)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        // Dropping the transaction rolls it back
        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("location {id}")));
        }

        sqlx::query("DELETE FROM photos WHERE location_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let created_at = Utc::now();
        let mut inserted = Vec::with_capacity(photos.len());
        for photo in photos {
            let result = sqlx::query(
                "INSERT INTO photos (location_id, title, source_url, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(id)
            .bind(&photo.title)
            .bind(&photo.source_url)
            .bind(created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            inserted.push(Photo {
                id: result.last_insert_rowid(),
                location_id: id,
                title: photo.title.clone(),
                source_url: photo.source_url.clone(),
                created_at,
            });
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        debug!(location_id = id, count = inserted.len(), "Replaced photo page");

        Ok(inserted)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("location {id}")));
        }
        Ok(())
    }
}
