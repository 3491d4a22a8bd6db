//! User self-service operations.

use std::sync::Arc;

use tracing::{info, warn};

use vidhub_auth::password::{PasswordHasher, PasswordValidator};
use vidhub_auth::SessionManager;
use vidhub_core::error::AppError;
use vidhub_database::repositories::UserRepository;
use vidhub_entity::user::User;

use crate::context::RequestContext;

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Session manager, for revoking other sessions after a password change.
    sessions: Arc<SessionManager>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            sessions,
        }
    }

    /// Gets the current user's record.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes the current user's password.
    ///
    /// The current password must verify. On success every other session of
    /// the account is revoked; the calling session stays valid.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_profile(ctx).await?;

        if !self
            .hasher
            .verify_password_blocking(current_password, &user.password_hash)
            .await?
        {
            warn!(user_id = ctx.user_id, "Password change rejected: wrong current password");
            return Err(AppError::validation("Current password is incorrect"));
        }

        self.validator.validate(new_password)?;
        let new_hash = self.hasher.hash_password_blocking(new_password).await?;

        if !self.user_repo.update_password(user.id, &new_hash).await? {
            return Err(AppError::not_found("User not found"));
        }

        self.sessions
            .revoke_other_sessions(user.id, ctx.session_id)
            .await?;

        info!(user_id = ctx.user_id, "Password changed");
        Ok(())
    }
}
