//! Self-service password change.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use vidhub_core::error::ErrorKind;

use crate::dto::request::ChangePasswordForm;
use crate::error::PageError;
use crate::extractors::{CurrentUser, ValidForm};
use crate::state::AppState;
use crate::views;

/// GET /change-password
pub async fn form(user: CurrentUser) -> Html<String> {
    Html(views::password::render(&user.nav(), None, None))
}

/// POST /change-password
///
/// A wrong current password or a too-short new one re-renders the form
/// with a 400; other sessions of the account are revoked on success.
pub async fn submit(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidForm(form): ValidForm<ChangePasswordForm>,
) -> Result<Response, PageError> {
    let result = state
        .user_service
        .change_password(&user, &form.old_password, &form.new_password)
        .await;

    match result {
        Ok(()) => Ok(Html(views::password::render(
            &user.nav(),
            None,
            Some("Password changed."),
        ))
        .into_response()),
        Err(e) if e.kind == ErrorKind::Validation => Ok((
            StatusCode::BAD_REQUEST,
            Html(views::password::render(
                &user.nav(),
                Some(e.public_message()),
                None,
            )),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}
