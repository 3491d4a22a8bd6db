//! CLI command definitions and dispatch.

pub mod folder;
pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use vidhub_core::config::AppConfig;
use vidhub_core::error::AppError;
use vidhub_database::DatabasePool;

/// VidHub: private video library administration
#[derive(Debug, Parser)]
#[command(name = "vidhub", version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over config/default.toml
    #[arg(short, long, env = "VIDHUB_CONFIG")]
    pub config: Option<String>,

    /// Environment overlay (config/{env}.toml)
    #[arg(long, env = "VIDHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the VidHub server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// User management
    User(user::UserArgs),
    /// Folder management
    Folder(folder::FolderArgs),
}

impl Commands {
    /// Dotted command path used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Serve(_) => "serve",
            Commands::Migrate => "migrate",
            Commands::User(args) => args.command.name(),
            Commands::Folder(args) => args.command.name(),
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(self.config.as_deref(), &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Folder(args) => folder::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the database and bring the schema up to date.
pub async fn open_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    vidhub_database::migration::run_migrations(db.pool()).await?;
    Ok(db)
}
