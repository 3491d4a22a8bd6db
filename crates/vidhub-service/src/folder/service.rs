//! Folder CRUD and per-folder browsing.

use std::sync::Arc;

use tracing::info;

use vidhub_auth::rbac::RbacEnforcer;
use vidhub_core::error::AppError;
use vidhub_database::repositories::{FolderRepository, VideoRepository};
use vidhub_entity::folder::{CreateFolder, Folder};
use vidhub_entity::video::Video;

use crate::context::RequestContext;

/// A folder with its videos, as shown to any signed-in user.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FolderListing {
    /// The folder itself.
    pub folder: Folder,
    /// Videos filed in the folder.
    pub videos: Vec<Video>,
    /// True when the folder holds no videos.
    pub is_empty: bool,
}

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Video repository.
    video_repo: Arc<VideoRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        folder_repo: Arc<FolderRepository>,
        video_repo: Arc<VideoRepository>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            folder_repo,
            video_repo,
            rbac,
        }
    }

    /// Returns a folder with its videos, or `None` if the folder does not exist.
    pub async fn folder_listing(
        &self,
        _ctx: &RequestContext,
        folder_id: i64,
    ) -> Result<Option<FolderListing>, AppError> {
        let Some(folder) = self.folder_repo.find_by_id(folder_id).await? else {
            return Ok(None);
        };

        let videos = self.video_repo.find_by_folder(folder.id).await?;
        Ok(Some(FolderListing {
            is_empty: videos.is_empty(),
            folder,
            videos,
        }))
    }

    /// Creates a folder.
    pub async fn create_folder(&self, ctx: &RequestContext, name: &str) -> Result<Folder, AppError> {
        self.rbac.require_admin(ctx.role)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                name: name.to_string(),
            })
            .await?;

        info!(admin_id = ctx.user_id, folder_id = folder.id, name = %folder.name, "Folder created");
        Ok(folder)
    }

    /// Deletes a folder together with every video filed in it.
    pub async fn delete_folder(&self, ctx: &RequestContext, folder_id: i64) -> Result<(), AppError> {
        self.rbac.require_admin(ctx.role)?;

        let removed = self
            .folder_repo
            .delete_with_videos(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        info!(
            admin_id = ctx.user_id,
            folder_id,
            videos_removed = removed,
            "Folder deleted"
        );
        Ok(())
    }
}
