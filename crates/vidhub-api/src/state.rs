//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vidhub_auth::{
    PasswordHasher, PasswordValidator, RbacEnforcer, SessionCleanup, SessionManager, SessionStore,
    SharedSecret,
};
use vidhub_core::config::AppConfig;
use vidhub_database::DatabasePool;
use vidhub_database::repositories::{
    FolderRepository, SessionRepository, UserRepository, VideoRepository,
};
use vidhub_service::{
    AdminUserService, BootstrapService, DashboardService, FolderService, SessionService,
    UserService, VideoService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Shared secret guarding the bot API
    pub bot_secret: Arc<SharedSecret>,
    /// Periodic session cleanup
    pub session_cleanup: Arc<SessionCleanup>,

    // ── Services ─────────────────────────────────────────────
    /// Login, logout and session resolution
    pub session_service: Arc<SessionService>,
    /// Self-service user operations
    pub user_service: Arc<UserService>,
    /// Admin user management and bot provisioning
    pub admin_user_service: Arc<AdminUserService>,
    /// Folder CRUD and browsing
    pub folder_service: Arc<FolderService>,
    /// Video metadata CRUD
    pub video_service: Arc<VideoService>,
    /// Aggregated page data
    pub dashboard_service: Arc<DashboardService>,
    /// First-boot admin provisioning
    pub bootstrap_service: Arc<BootstrapService>,
}

impl AppState {
    /// Wire repositories, auth primitives and services over one pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        // ── Repositories ─────────────────────────────────────
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(pool.clone()));
        let folder_repo = Arc::new(FolderRepository::new(pool.clone()));
        let video_repo = Arc::new(VideoRepository::new(pool));

        // ── Auth ─────────────────────────────────────────────
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());
        let session_store = Arc::new(SessionStore::new(
            Arc::clone(&session_repo),
            config.session.clone(),
        ));
        let session_manager = Arc::new(SessionManager::new(
            Arc::clone(&session_store),
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        ));
        let session_cleanup = Arc::new(SessionCleanup::new(Arc::clone(&session_store)));
        let bot_secret = Arc::new(SharedSecret::new(config.auth.bot_secret.as_deref()));

        // ── Services ─────────────────────────────────────────
        let session_service = Arc::new(SessionService::new(Arc::clone(&session_manager)));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&session_manager),
        ));
        let admin_user_service = Arc::new(AdminUserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&rbac_enforcer),
        ));
        let folder_service = Arc::new(FolderService::new(
            Arc::clone(&folder_repo),
            Arc::clone(&video_repo),
            Arc::clone(&rbac_enforcer),
        ));
        let video_service = Arc::new(VideoService::new(
            Arc::clone(&video_repo),
            Arc::clone(&rbac_enforcer),
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&user_repo),
            Arc::clone(&folder_repo),
            Arc::clone(&video_repo),
            Arc::clone(&rbac_enforcer),
        ));
        let bootstrap_service = Arc::new(BootstrapService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            config.auth.clone(),
        ));

        Self {
            config: Arc::new(config),
            db,
            bot_secret,
            session_cleanup,
            session_service,
            user_service,
            admin_user_service,
            folder_service,
            video_service,
            dashboard_service,
            bootstrap_service,
        }
    }
}
