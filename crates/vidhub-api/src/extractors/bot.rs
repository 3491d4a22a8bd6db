//! Shared-secret extractor for the bot API.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vidhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the configured bot secret.
///
/// Runs before the body is read, so a bad secret is rejected whatever the
/// payload looks like.
#[derive(Debug, Clone, Copy)]
pub struct BotAuth;

impl FromRequestParts<AppState> for BotAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(state.config.auth.bot_secret_header.as_str())
            .and_then(|v| v.to_str().ok());

        if state.bot_secret.verify(presented) {
            Ok(Self)
        } else {
            tracing::warn!(
                configured = state.bot_secret.is_configured(),
                header_present = presented.is_some(),
                "Bot request rejected"
            );
            Err(AppError::authorization("Invalid or missing bot secret").into())
        }
    }
}
