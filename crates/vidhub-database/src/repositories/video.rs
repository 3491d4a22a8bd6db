//! Video repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use vidhub_core::error::{AppError, ErrorKind};
use vidhub_core::result::AppResult;
use vidhub_entity::video::{CreateVideo, Video};

/// Repository for video metadata.
#[derive(Debug, Clone)]
pub struct VideoRepository {
    pool: SqlitePool,
}

impl VideoRepository {
    /// Create a new video repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a video by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }

    /// List every video in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list videos", e))
    }

    /// List the videos filed in a folder.
    pub async fn find_by_folder(&self, folder_id: i64) -> AppResult<Vec<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE folder_id = ?1 ORDER BY id ASC")
            .bind(folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list videos in folder", e)
            })
    }

    /// List the videos that belong to no folder.
    pub async fn find_unfiled(&self) -> AppResult<Vec<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE folder_id IS NULL ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list unfiled videos", e)
            })
    }

    /// Insert a video. A folder id that does not exist yields a `Validation` error.
    pub async fn create(&self, data: &CreateVideo) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos (title, filename, folder_id, created_at) \
             VALUES (?1, ?2, ?3, ?4) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.filename)
        .bind(data.folder_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation(format!(
                    "Folder {} does not exist",
                    data.folder_id.unwrap_or_default()
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create video", e),
        })
    }

    /// Delete a video. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete video", e))?;
        Ok(result.rows_affected() > 0)
    }
}
