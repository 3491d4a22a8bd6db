//! Session storage operations wrapping the database repository.

use std::sync::Arc;

use chrono::{Duration, Utc};

use vidhub_core::config::SessionConfig;
use vidhub_core::error::AppError;
use vidhub_database::repositories::SessionRepository;
use vidhub_entity::session::{CreateSession, Session};

/// Applies the configured timeouts on top of the session repository.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>, config: SessionConfig) -> Self {
        Self { repo, config }
    }

    /// Idle timeout as a chrono duration.
    pub fn idle_timeout(&self) -> Duration {
        Duration::minutes(self.config.idle_timeout_minutes as i64)
    }

    /// Creates a new session record whose absolute expiry starts now.
    pub async fn create_session(&self, user_id: i64, token_hash: &str) -> Result<Session, AppError> {
        let expires_at = Utc::now() + Duration::hours(self.config.absolute_timeout_hours as i64);
        self.repo
            .create(&CreateSession {
                user_id,
                token_hash: token_hash.to_string(),
                expires_at,
            })
            .await
    }

    /// Finds a session by token hash, expired or not.
    pub async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        self.repo.find_by_token_hash(token_hash).await
    }

    /// Updates session's last activity timestamp.
    pub async fn touch_activity(&self, session_id: i64) -> Result<(), AppError> {
        self.repo.touch(session_id, Utc::now()).await
    }

    /// Deletes a session record.
    pub async fn delete_session(&self, session_id: i64) -> Result<(), AppError> {
        self.repo.delete(session_id).await.map(|_| ())
    }

    /// Deletes the session matching a token hash, if any.
    pub async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, AppError> {
        self.repo.delete_by_token_hash(token_hash).await
    }

    /// Deletes every session of a user except the given one.
    pub async fn revoke_others(&self, user_id: i64, keep_session_id: i64) -> Result<u64, AppError> {
        self.repo.delete_by_user_except(user_id, keep_session_id).await
    }

    /// Deletes all sessions past their absolute or idle timeout.
    pub async fn delete_expired(&self) -> Result<u64, AppError> {
        let now = Utc::now();
        self.repo
            .delete_expired_or_idle(now, now - self.idle_timeout())
            .await
    }
}
