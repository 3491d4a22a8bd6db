//! Admin panel handlers. Every mutation redirects back to `/admin`.

use axum::extract::State;
use axum::response::{Html, Redirect};

use vidhub_core::error::AppError;
use vidhub_entity::user::UserRole;
use vidhub_service::user::CreateUserRequest;
use vidhub_service::video::CreateVideoRequest;

use crate::dto::request::{AddFolderForm, AddUserForm, AddVideoForm, IdForm};
use crate::error::PageError;
use crate::extractors::{AdminUser, ValidForm, parse_id};
use crate::state::AppState;
use crate::views;

const ADMIN_PATH: &str = "/admin";

fn form_id(form: &IdForm) -> Result<i64, AppError> {
    parse_id(&form.id).ok_or_else(|| AppError::validation("A numeric id is required"))
}

/// GET /admin
pub async fn dashboard(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Html<String>, PageError> {
    let data = state.dashboard_service.admin_dashboard(&admin).await?;
    Ok(Html(views::admin::render(
        &admin.nav(),
        admin.user_id,
        &data,
        &state.config.media,
    )))
}

/// POST /admin/add-user
pub async fn add_user(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidForm(form): ValidForm<AddUserForm>,
) -> Result<Redirect, PageError> {
    let role = match form.role.as_deref().map(str::trim) {
        None | Some("") => UserRole::User,
        Some(raw) => raw.parse::<UserRole>()?,
    };

    state
        .admin_user_service
        .create_user(
            &admin,
            CreateUserRequest {
                username: form.username,
                password: form.password,
                role,
            },
        )
        .await?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// POST /admin/delete-user
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidForm(form): ValidForm<IdForm>,
) -> Result<Redirect, PageError> {
    let id = form_id(&form)?;
    state.admin_user_service.delete_user(&admin, id).await?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// POST /admin/add-folder
pub async fn add_folder(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidForm(form): ValidForm<AddFolderForm>,
) -> Result<Redirect, PageError> {
    state.folder_service.create_folder(&admin, &form.name).await?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// POST /admin/delete-folder
pub async fn delete_folder(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidForm(form): ValidForm<IdForm>,
) -> Result<Redirect, PageError> {
    let id = form_id(&form)?;
    state.folder_service.delete_folder(&admin, id).await?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// POST /admin/add-video
pub async fn add_video(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidForm(form): ValidForm<AddVideoForm>,
) -> Result<Redirect, PageError> {
    state
        .video_service
        .create_video(
            &admin,
            CreateVideoRequest {
                title: form.title,
                filename: form.filename,
                folder_id: form.folder_id,
            },
        )
        .await?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// POST /admin/delete-video
pub async fn delete_video(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidForm(form): ValidForm<IdForm>,
) -> Result<Redirect, PageError> {
    let id = form_id(&form)?;
    state.video_service.delete_video(&admin, id).await?;
    Ok(Redirect::to(ADMIN_PATH))
}
