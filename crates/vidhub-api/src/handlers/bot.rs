//! Bot provisioning endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::BotAddUserRequest;
use crate::dto::response::{ApiResponse, BotUserResponse};
use crate::error::ApiError;
use crate::extractors::{BotAuth, ValidJson};
use crate::state::AppState;

/// POST /api/add-user
///
/// The secret header is checked before the body is parsed. Created users
/// always get the `user` role.
pub async fn add_user(
    State(state): State<AppState>,
    _bot: BotAuth,
    ValidJson(req): ValidJson<BotAddUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BotUserResponse>>), ApiError> {
    let user = state
        .admin_user_service
        .provision_user(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(BotUserResponse::from(&user))),
    ))
}
