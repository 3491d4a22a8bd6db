//! Video entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata for a video file living under the media root.
///
/// Videos are never edited in place; they are created and deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    /// Unique video identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Path of the file relative to the media root.
    pub filename: String,
    /// Containing folder; `None` means unfiled.
    pub folder_id: Option<i64>,
    /// When the video was created.
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Check whether the video belongs to no folder.
    pub fn is_unfiled(&self) -> bool {
        self.folder_id.is_none()
    }
}

/// Data required to create a new video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideo {
    /// Display title.
    pub title: String,
    /// Path relative to the media root.
    pub filename: String,
    /// Containing folder, if any.
    pub folder_id: Option<i64>,
}
