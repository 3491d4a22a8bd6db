//! Aggregated page data: the admin dashboard and the viewer library.

use std::sync::Arc;

use vidhub_auth::rbac::RbacEnforcer;
use vidhub_core::error::AppError;
use vidhub_database::repositories::{FolderRepository, UserRepository, VideoRepository};
use vidhub_entity::folder::Folder;
use vidhub_entity::user::User;
use vidhub_entity::video::Video;

use crate::context::RequestContext;

/// Everything the admin panel shows.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AdminDashboard {
    /// All users.
    pub users: Vec<User>,
    /// All folders.
    pub folders: Vec<Folder>,
    /// All videos, filed or not.
    pub videos: Vec<Video>,
}

/// What a signed-in user sees on the library page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Library {
    /// All folders.
    pub folders: Vec<Folder>,
    /// Videos that belong to no folder.
    pub unfiled: Vec<Video>,
}

/// Loads multi-table page data with concurrent queries.
#[derive(Debug, Clone)]
pub struct DashboardService {
    user_repo: Arc<UserRepository>,
    folder_repo: Arc<FolderRepository>,
    video_repo: Arc<VideoRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        folder_repo: Arc<FolderRepository>,
        video_repo: Arc<VideoRepository>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            user_repo,
            folder_repo,
            video_repo,
            rbac,
        }
    }

    /// Loads users, folders and videos for the admin panel.
    pub async fn admin_dashboard(&self, ctx: &RequestContext) -> Result<AdminDashboard, AppError> {
        self.rbac.require_admin(ctx.role)?;

        let (users, folders, videos) = tokio::try_join!(
            self.user_repo.find_all(),
            self.folder_repo.find_all(),
            self.video_repo.find_all(),
        )?;

        Ok(AdminDashboard {
            users,
            folders,
            videos,
        })
    }

    /// Loads folders and unfiled videos for the library page.
    pub async fn library(&self, _ctx: &RequestContext) -> Result<Library, AppError> {
        let (folders, unfiled) =
            tokio::try_join!(self.folder_repo.find_all(), self.video_repo.find_unfiled())?;
        Ok(Library { folders, unfiled })
    }
}
