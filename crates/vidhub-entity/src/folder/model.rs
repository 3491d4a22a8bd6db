//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named group of videos. Names are free text and need not be unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
}

/// A folder together with the number of videos filed in it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FolderSummary {
    /// Unique folder identifier.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Number of videos referencing this folder.
    pub video_count: i64,
}
