//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use vidhub_core::error::{AppError, ErrorKind};
use vidhub_core::result::AppResult;
use vidhub_entity::session::{CreateSession, Session};

/// Repository for server-side browser sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a session by token hash.
    pub async fn find_by_token_hash(&self, token_hash: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token_hash = ?1")
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
            })
    }

    /// Count sessions held by a user.
    pub async fn count_by_user(&self, user_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = ?1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count sessions", e))
    }

    /// Create a new session.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        let now = Utc::now();
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, token_hash, created_at, expires_at, last_activity) \
             VALUES (?1, ?2, ?3, ?4, ?3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.token_hash)
        .bind(now)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Update last activity timestamp.
    pub async fn touch(&self, session_id: i64, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_activity = ?1 WHERE id = ?2")
            .bind(at)
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last activity", e)
            })?;
        Ok(())
    }

    /// Delete a session by ID.
    pub async fn delete(&self, session_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the session matching a token hash.
    pub async fn delete_by_token_hash(&self, token_hash: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session of a user except `keep_id`.
    pub async fn delete_by_user_except(&self, user_id: i64, keep_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?1 AND id != ?2")
            .bind(user_id)
            .bind(keep_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke user sessions", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete every session of a user.
    pub async fn delete_by_user(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke user sessions", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete sessions past their absolute expiry or idle since before `idle_cutoff`.
    pub async fn delete_expired_or_idle(
        &self,
        now: DateTime<Utc>,
        idle_cutoff: DateTime<Utc>,
    ) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM sessions WHERE expires_at <= ?1 OR last_activity < ?2")
                .bind(now)
                .bind(idle_cutoff)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to cleanup sessions", e)
                })?;
        Ok(result.rows_affected())
    }
}
