//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use vidhub_auth::{PasswordHasher, PasswordValidator};
use vidhub_core::config::AppConfig;
use vidhub_core::error::AppError;
use vidhub_database::repositories::{SessionRepository, UserRepository};
use vidhub_entity::user::{CreateUser, User, UserRole};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Create a user
    Add {
        /// Username
        username: String,
        /// Role: admin or user
        #[arg(short, long, default_value = "user")]
        role: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Set a user's password and sign them out everywhere
    Passwd {
        /// Username
        username: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Delete a user and their sessions
    Delete {
        /// Username
        username: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

impl UserCommand {
    /// Command path for logging.
    pub fn name(&self) -> &'static str {
        match self {
            UserCommand::List => "user.list",
            UserCommand::Add { .. } => "user.add",
            UserCommand::Passwd { .. } => "user.passwd",
            UserCommand::Delete { .. } => "user.delete",
        }
    }
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    role: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            role: u.role.to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

async fn require_user(repo: &UserRepository, username: &str) -> Result<User, AppError> {
    repo.find_by_username(username)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::open_database(config).await?;
    let user_repo = UserRepository::new(db.pool().clone());
    let session_repo = SessionRepository::new(db.pool().clone());
    let hasher = PasswordHasher::new();
    let validator = PasswordValidator::new(&config.auth);

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = user_repo.find_all().await?.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        UserCommand::Add {
            username,
            role,
            password,
        } => {
            let role: UserRole = role.parse()?;
            let username = username.trim();
            if username.is_empty() {
                return Err(AppError::validation("Username is required"));
            }

            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Password")?,
            };
            validator.validate(&password)?;

            let user = user_repo
                .create(&CreateUser {
                    username: username.to_string(),
                    password_hash: hasher.hash_password(&password)?,
                    role,
                })
                .await?;

            output::print_success(&format!(
                "User '{}' created (id: {}, role: {})",
                user.username, user.id, user.role
            ));
        }
        UserCommand::Passwd { username, password } => {
            let user = require_user(&user_repo, username).await?;

            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("New password")?,
            };
            validator.validate(&password)?;

            user_repo
                .update_password(user.id, &hasher.hash_password(&password)?)
                .await?;
            let revoked = session_repo.delete_by_user(user.id).await?;

            output::print_success(&format!(
                "Password changed for '{username}' ({revoked} session(s) signed out)"
            ));
        }
        UserCommand::Delete { username, force } => {
            let user = require_user(&user_repo, username).await?;

            if user.is_admin() && user_repo.count_by_role(UserRole::Admin).await? <= 1 {
                output::print_warning("This is the last admin account.");
            }

            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete user '{username}'?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            user_repo.delete(user.id).await?;
            output::print_success(&format!("User '{username}' deleted"));
        }
    }

    db.close().await;
    Ok(())
}
