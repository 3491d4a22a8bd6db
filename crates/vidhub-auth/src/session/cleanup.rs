//! Expired and idle session cleanup.

use std::sync::Arc;

use tracing::{debug, info};

use vidhub_core::error::AppError;

use super::store::SessionStore;

/// Handles periodic cleanup of expired and idle sessions.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    /// Session store for deleting sessions.
    session_store: Arc<SessionStore>,
}

impl SessionCleanup {
    /// Creates a new session cleanup handler.
    pub fn new(session_store: Arc<SessionStore>) -> Self {
        Self { session_store }
    }

    /// Runs a cleanup cycle, deleting all expired and idle sessions.
    ///
    /// Returns the number of sessions removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let removed = self.session_store.delete_expired().await?;

        if removed > 0 {
            info!(removed, "Session cleanup completed");
        } else {
            debug!("Session cleanup found nothing to remove");
        }

        Ok(removed)
    }
}
