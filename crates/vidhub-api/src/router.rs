//! Route definitions for the VidHub web application.
//!
//! Browser pages live at the root, the bot API under `/api`, and the video
//! files under the configured media mount path behind the session gate.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.request_body_limit_bytes;
    let mount_path = state.config.media.mount_path.clone();

    let media = ServiceBuilder::new()
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session,
        ))
        .service(ServeDir::new(&state.config.media.root));

    Router::new()
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(video_routes())
        .merge(account_routes())
        .nest("/api", bot_routes())
        .route("/health", get(handlers::health::health))
        .nest_service(&mount_path, media)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login page, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::auth::login_page))
        .route("/login", post(handlers::auth::login))
        .route("/logout", get(handlers::auth::logout))
}

/// Admin panel and its CRUD forms
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handlers::admin::dashboard))
        .route("/admin/add-user", post(handlers::admin::add_user))
        .route("/admin/delete-user", post(handlers::admin::delete_user))
        .route("/admin/add-folder", post(handlers::admin::add_folder))
        .route("/admin/delete-folder", post(handlers::admin::delete_folder))
        .route("/admin/add-video", post(handlers::admin::add_video))
        .route("/admin/delete-video", post(handlers::admin::delete_video))
}

/// Library browsing
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(handlers::videos::library))
        .route("/videos/folder/{folder_id}", get(handlers::videos::folder))
}

/// Self-service account pages
fn account_routes() -> Router<AppState> {
    Router::new().route(
        "/change-password",
        get(handlers::password::form).post(handlers::password::submit),
    )
}

/// Shared-secret bot API
fn bot_routes() -> Router<AppState> {
    Router::new().route("/add-user", post(handlers::bot::add_user))
}
