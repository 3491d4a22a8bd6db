//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A logged-in browser session.
///
/// Only the user id is kept; the user row is re-read on every request so
/// role and password changes apply immediately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: i64,
    /// The user this session belongs to.
    pub user_id: i64,
    /// SHA-256 hex digest of the cookie token.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires (absolute timeout).
    pub expires_at: DateTime<Utc>,
    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Check whether the absolute timeout has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Check whether the session has been idle for longer than `idle_timeout`.
    pub fn is_idle(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now - self.last_activity > idle_timeout
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The user this session belongs to.
    pub user_id: i64,
    /// SHA-256 hex digest of the cookie token.
    pub token_hash: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}
