//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use vidhub_core::config::AppConfig;
use vidhub_core::error::AppError;
use vidhub_database::repositories::FolderRepository;
use vidhub_entity::folder::FolderSummary;

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List folders with their video counts
    List,
}

impl FolderCommand {
    /// Command path for logging.
    pub fn name(&self) -> &'static str {
        match self {
            FolderCommand::List => "folder.list",
        }
    }
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    id: i64,
    name: String,
    videos: i64,
    created_at: String,
}

impl From<&FolderSummary> for FolderRow {
    fn from(f: &FolderSummary) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            videos: f.video_count,
            created_at: f.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::open_database(config).await?;
    let folder_repo = FolderRepository::new(db.pool().clone());

    match &args.command {
        FolderCommand::List => {
            let rows: Vec<FolderRow> = folder_repo
                .find_all_with_counts()
                .await?
                .iter()
                .map(FolderRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
