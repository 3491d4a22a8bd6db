//! Folder repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use vidhub_core::error::{AppError, ErrorKind};
use vidhub_core::result::AppResult;
use vidhub_entity::folder::{CreateFolder, Folder, FolderSummary};

/// Repository for folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: SqlitePool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List every folder in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List every folder with the number of videos it holds.
    pub async fn find_all_with_counts(&self) -> AppResult<Vec<FolderSummary>> {
        sqlx::query_as::<_, FolderSummary>(
            "SELECT f.id, f.name, f.created_at, COUNT(v.id) AS video_count \
             FROM folders f LEFT JOIN videos v ON v.folder_id = f.id \
             GROUP BY f.id ORDER BY f.id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list folder summaries", e)
        })
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, created_at) VALUES (?1, ?2) RETURNING *",
        )
        .bind(&data.name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    /// Delete a folder and every video filed in it as one transaction.
    ///
    /// Returns the number of videos removed, or `None` if the folder did not
    /// exist (in which case nothing is changed).
    pub async fn delete_with_videos(&self, id: i64) -> AppResult<Option<u64>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let videos = sqlx::query("DELETE FROM videos WHERE folder_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder videos", e)
            })?;

        let folder = sqlx::query("DELETE FROM folders WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete folder", e))?;

        if folder.rows_affected() == 0 {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Ok(None);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(Some(videos.rows_affected()))
    }
}
