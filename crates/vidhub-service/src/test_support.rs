//! Shared fixtures for service tests.

use std::sync::Arc;

use vidhub_auth::{PasswordHasher, PasswordValidator, RbacEnforcer, SessionManager, SessionStore};
use vidhub_core::config::{AuthConfig, SessionConfig};
use vidhub_database::DatabasePool;
use vidhub_database::migration::run_migrations;
use vidhub_database::repositories::{
    FolderRepository, SessionRepository, UserRepository, VideoRepository,
};
use vidhub_entity::user::{CreateUser, User, UserRole};

use crate::{
    AdminUserService, BootstrapService, DashboardService, FolderService, RequestContext,
    SessionService, UserService, VideoService,
};

pub(crate) struct TestServices {
    pub users: Arc<UserRepository>,
    pub folder_repo: Arc<FolderRepository>,
    pub video_repo: Arc<VideoRepository>,
    pub hasher: Arc<PasswordHasher>,
    pub sessions: SessionService,
    pub user_service: UserService,
    pub admin_users: AdminUserService,
    pub folders: FolderService,
    pub videos: VideoService,
    pub dashboard: DashboardService,
    pub bootstrap: BootstrapService,
    pub admin: User,
}

impl TestServices {
    /// Fresh in-memory database with one admin (`admin` / `secret1`).
    pub async fn new() -> Self {
        let db = DatabasePool::connect_in_memory().await.unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.into_pool();

        let users = Arc::new(UserRepository::new(pool.clone()));
        let folder_repo = Arc::new(FolderRepository::new(pool.clone()));
        let video_repo = Arc::new(VideoRepository::new(pool.clone()));
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::default());
        let rbac = Arc::new(RbacEnforcer::new());

        let store = Arc::new(SessionStore::new(
            Arc::new(SessionRepository::new(pool)),
            SessionConfig::default(),
        ));
        let manager = Arc::new(SessionManager::new(store, users.clone(), hasher.clone()));

        let admin = users
            .create(&CreateUser {
                username: "admin".into(),
                password_hash: hasher.hash_password("secret1").unwrap(),
                role: UserRole::Admin,
            })
            .await
            .unwrap();

        Self {
            sessions: SessionService::new(manager.clone()),
            user_service: UserService::new(
                users.clone(),
                hasher.clone(),
                validator.clone(),
                manager,
            ),
            admin_users: AdminUserService::new(
                users.clone(),
                hasher.clone(),
                validator,
                rbac.clone(),
            ),
            folders: FolderService::new(folder_repo.clone(), video_repo.clone(), rbac.clone()),
            videos: VideoService::new(video_repo.clone(), rbac.clone()),
            dashboard: DashboardService::new(
                users.clone(),
                folder_repo.clone(),
                video_repo.clone(),
                rbac,
            ),
            bootstrap: BootstrapService::new(users.clone(), hasher.clone(), AuthConfig::default()),
            users,
            folder_repo,
            video_repo,
            hasher,
            admin,
        }
    }

    pub async fn add_user(&self, username: &str, password: &str, role: UserRole) -> User {
        self.users
            .create(&CreateUser {
                username: username.into(),
                password_hash: self.hasher.hash_password(password).unwrap(),
                role,
            })
            .await
            .unwrap()
    }

    pub fn admin_ctx(&self) -> RequestContext {
        RequestContext::new(self.admin.id, 0, UserRole::Admin, self.admin.username.clone())
    }

    pub fn user_ctx(&self, user: &User) -> RequestContext {
        RequestContext::new(user.id, 0, user.role, user.username.clone())
    }
}
