//! Admin user management and bot provisioning.

use std::sync::Arc;

use tracing::info;

use vidhub_auth::password::{PasswordHasher, PasswordValidator};
use vidhub_auth::rbac::RbacEnforcer;
use vidhub_core::error::AppError;
use vidhub_database::repositories::UserRepository;
use vidhub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

/// Request to create a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateUserRequest {
    /// Username (unique).
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Role assignment.
    pub role: UserRole,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            rbac,
        }
    }

    /// Lists all users.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        self.rbac.require_admin(ctx.role)?;
        self.user_repo.find_all().await
    }

    /// Creates a new user on behalf of an admin.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        req: CreateUserRequest,
    ) -> Result<User, AppError> {
        self.rbac.require_admin(ctx.role)?;

        let user = self.insert(req).await?;

        info!(
            admin_id = ctx.user_id,
            new_user_id = user.id,
            username = %user.username,
            role = %user.role,
            "User created by admin"
        );

        Ok(user)
    }

    /// Creates a plain user for a machine client that already passed the
    /// shared-secret check. The role is always `user`.
    pub async fn provision_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .insert(CreateUserRequest {
                username: username.to_string(),
                password: password.to_string(),
                role: UserRole::User,
            })
            .await?;

        info!(
            new_user_id = user.id,
            username = %user.username,
            "User provisioned via bot API"
        );

        Ok(user)
    }

    /// Deletes a user. Admins cannot delete their own account.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: i64) -> Result<(), AppError> {
        self.rbac.require_admin(ctx.role)?;

        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        if !self.user_repo.delete(user_id).await? {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        info!(admin_id = ctx.user_id, deleted_user_id = user_id, "User deleted by admin");
        Ok(())
    }

    async fn insert(&self, req: CreateUserRequest) -> Result<User, AppError> {
        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password_blocking(&req.password).await?;

        self.user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role: req.role,
            })
            .await
    }
}
