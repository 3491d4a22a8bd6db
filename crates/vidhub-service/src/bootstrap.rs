//! First-boot provisioning of an administrator account.

use std::sync::Arc;

use tracing::{error, info, warn};

use vidhub_auth::password::PasswordHasher;
use vidhub_auth::token::generate_secret;
use vidhub_core::config::AuthConfig;
use vidhub_core::error::AppError;
use vidhub_database::repositories::UserRepository;
use vidhub_entity::user::{CreateUser, User, UserRole};

const GENERATED_PASSWORD_LENGTH: usize = 16;

/// Ensures at least one admin exists.
#[derive(Debug, Clone)]
pub struct BootstrapService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    config: AuthConfig,
}

impl BootstrapService {
    /// Creates a new bootstrap service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            config,
        }
    }

    /// Create the configured admin account if no admin exists yet.
    ///
    /// Without a configured password a random one is generated and logged
    /// once at WARN. Returns the created user, or `None` if an admin was
    /// already present.
    pub async fn ensure_admin(&self) -> Result<Option<User>, AppError> {
        if self.user_repo.count_by_role(UserRole::Admin).await? > 0 {
            return Ok(None);
        }

        let username = self.config.bootstrap_admin_username.trim();
        if username.is_empty() {
            return Err(AppError::configuration(
                "auth.bootstrap_admin_username must not be empty",
            ));
        }

        if let Some(existing) = self.user_repo.find_by_username(username).await? {
            error!(
                username = %existing.username,
                "auth.bootstrap_admin_username names an existing non-admin account"
            );
            return Err(AppError::configuration(format!(
                "auth.bootstrap_admin_username '{username}' is already taken by a non-admin \
                 account; choose another name or remove that account with 'vidhub-cli user delete'"
            )));
        }

        let (password, generated) = match self.config.bootstrap_admin_password.as_deref() {
            Some(password) if !password.is_empty() => (password.to_string(), false),
            _ => (generate_secret(GENERATED_PASSWORD_LENGTH), true),
        };

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash: self.hasher.hash_password_blocking(&password).await?,
                role: UserRole::Admin,
            })
            .await?;

        if generated {
            warn!(
                username = %user.username,
                password = %password,
                "Created bootstrap admin with a generated password; change it after first login"
            );
        } else {
            info!(username = %user.username, "Created bootstrap admin");
        }

        Ok(Some(user))
    }
}
