//! Video metadata creation and deletion.

use std::path::{Component, Path};
use std::sync::Arc;

use tracing::info;

use vidhub_auth::rbac::RbacEnforcer;
use vidhub_core::error::AppError;
use vidhub_database::repositories::VideoRepository;
use vidhub_entity::video::{CreateVideo, Video};

use crate::context::RequestContext;

/// Request to register a video file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateVideoRequest {
    /// Display title.
    pub title: String,
    /// Path relative to the media root.
    pub filename: String,
    /// Raw folder id from the form; blank means unfiled.
    pub folder_id: Option<String>,
}

/// Manages video metadata.
#[derive(Debug, Clone)]
pub struct VideoService {
    /// Video repository.
    video_repo: Arc<VideoRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl VideoService {
    /// Creates a new video service.
    pub fn new(video_repo: Arc<VideoRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { video_repo, rbac }
    }

    /// Lists videos that belong to no folder.
    pub async fn list_unfiled(&self, _ctx: &RequestContext) -> Result<Vec<Video>, AppError> {
        self.video_repo.find_unfiled().await
    }

    /// Registers a video. The file itself is not checked for existence.
    pub async fn create_video(
        &self,
        ctx: &RequestContext,
        req: CreateVideoRequest,
    ) -> Result<Video, AppError> {
        self.rbac.require_admin(ctx.role)?;

        let title = req.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Video title is required"));
        }

        let filename = req.filename.trim();
        validate_filename(filename)?;
        let folder_id = parse_folder_id(req.folder_id.as_deref())?;

        let video = self
            .video_repo
            .create(&CreateVideo {
                title: title.to_string(),
                filename: filename.to_string(),
                folder_id,
            })
            .await?;

        info!(
            admin_id = ctx.user_id,
            video_id = video.id,
            folder_id = ?video.folder_id,
            "Video created"
        );
        Ok(video)
    }

    /// Deletes a video.
    pub async fn delete_video(&self, ctx: &RequestContext, video_id: i64) -> Result<(), AppError> {
        self.rbac.require_admin(ctx.role)?;

        if !self.video_repo.delete(video_id).await? {
            return Err(AppError::not_found(format!("Video {video_id} not found")));
        }

        info!(admin_id = ctx.user_id, video_id, "Video deleted");
        Ok(())
    }
}

/// Parse the optional folder id from a form. Blank means unfiled.
pub fn parse_folder_id(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("Invalid folder id: '{value}'"))),
    }
}

/// Check that a filename is a plain relative path inside the media root.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::validation("Video filename is required"));
    }

    let escapes = filename.contains('\\')
        || Path::new(filename)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AppError::validation(format!(
            "Invalid video filename '{filename}': must be a relative path inside the media root"
        )));
    }

    Ok(())
}
