//! Browsing handlers for signed-in users.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::PageError;
use crate::extractors::{CurrentUser, parse_id};
use crate::state::AppState;
use crate::views;

/// GET /videos
pub async fn library(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, PageError> {
    let library = state.dashboard_service.library(&user).await?;
    Ok(Html(views::videos::render_library(
        &user.nav(),
        &library,
        &state.config.media,
    )))
}

/// GET /videos/folder/{folder_id}
///
/// An unknown or malformed folder id sends the user back to `/videos`.
pub async fn folder(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let Some(folder_id) = parse_id(&raw_id) else {
        return Ok(Redirect::to("/videos").into_response());
    };

    match state.folder_service.folder_listing(&user, folder_id).await? {
        Some(listing) => Ok(Html(views::videos::render_folder(
            &user.nav(),
            &listing,
            &state.config.media,
        ))
        .into_response()),
        None => Ok(Redirect::to("/videos").into_response()),
    }
}
