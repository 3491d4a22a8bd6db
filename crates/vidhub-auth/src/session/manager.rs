//! Session lifecycle manager: login, request validation and logout.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use vidhub_core::error::AppError;
use vidhub_database::repositories::UserRepository;
use vidhub_entity::session::Session;
use vidhub_entity::user::User;

use crate::password::PasswordHasher;
use crate::token::{generate_session_token, hash_token};

use super::store::SessionStore;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Raw token for the session cookie. Not stored server-side.
    pub token: String,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// A session that passed validation, with the user re-read from the store.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// The live session row.
    pub session: Session,
    /// The user as currently stored.
    pub user: User,
}

/// Manages the complete session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session persistence.
    session_store: Arc<SessionStore>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        session_store: Arc<SessionStore>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            session_store,
            user_repo,
            password_hasher,
        }
    }

    /// Verify credentials and open a new session.
    ///
    /// Unknown usernames and wrong passwords fail identically with
    /// `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            self.password_hasher
                .burn_verification_blocking(password)
                .await;
            warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::invalid_credentials());
        };

        if !self
            .password_hasher
            .verify_password_blocking(password, &user.password_hash)
            .await?
        {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::invalid_credentials());
        }

        let token = generate_session_token();
        let session = self
            .session_store
            .create_session(user.id, &hash_token(&token))
            .await?;

        info!(
            user_id = user.id,
            session_id = session.id,
            role = %user.role,
            "Login successful"
        );

        Ok(LoginResult {
            token,
            session,
            user,
        })
    }

    /// Resolve a cookie token to a live session and its current user.
    ///
    /// Expired or idle sessions, and sessions whose user has been deleted,
    /// are removed and reported as `Authentication` errors.
    pub async fn validate(&self, token: &str) -> Result<AuthenticatedSession, AppError> {
        let session = self
            .session_store
            .find_by_token_hash(&hash_token(token))
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;

        let now = Utc::now();
        if session.is_expired(now) || session.is_idle(now, self.session_store.idle_timeout()) {
            debug!(session_id = session.id, "Session timed out");
            self.session_store.delete_session(session.id).await?;
            return Err(AppError::authentication("Session expired"));
        }

        let Some(user) = self.user_repo.find_by_id(session.user_id).await? else {
            self.session_store.delete_session(session.id).await?;
            return Err(AppError::authentication("Session user no longer exists"));
        };

        self.session_store.touch_activity(session.id).await?;

        Ok(AuthenticatedSession { session, user })
    }

    /// Destroy the session behind a token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        if self
            .session_store
            .delete_by_token_hash(&hash_token(token))
            .await?
        {
            info!("Logout successful");
        }
        Ok(())
    }

    /// Revoke every other session of a user, keeping `keep_session_id`.
    pub async fn revoke_other_sessions(
        &self,
        user_id: i64,
        keep_session_id: i64,
    ) -> Result<u64, AppError> {
        let revoked = self
            .session_store
            .revoke_others(user_id, keep_session_id)
            .await?;
        if revoked > 0 {
            info!(user_id, revoked, "Revoked other sessions");
        }
        Ok(revoked)
    }
}
