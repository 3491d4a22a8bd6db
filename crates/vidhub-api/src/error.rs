//! Maps domain `AppError` to HTTP responses.
//!
//! Browser routes use [`PageError`] (redirects and HTML pages); the bot API
//! uses [`ApiError`] (JSON bodies). Both wrap the same `AppError`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

use vidhub_core::error::{AppError, ErrorKind};

use crate::views;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// An error rendered as JSON.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication | ErrorKind::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Internal | ErrorKind::Database | ErrorKind::Configuration => {
                tracing::error!(error = ?err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            success: false,
            error: error_code.to_string(),
            message: err.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// An error rendered for a browser.
///
/// Missing or expired sessions redirect to the login page; everything else
/// becomes an HTML error page. Internal failures are logged with full detail
/// and shown generically.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, heading) = match err.kind {
            ErrorKind::Authentication => return Redirect::to("/").into_response(),
            ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Sign-in failed"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "Forbidden"),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "Invalid request"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "Conflict"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            ErrorKind::Internal | ErrorKind::Database | ErrorKind::Configuration => {
                tracing::error!(error = ?err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        let detail = match err.kind {
            ErrorKind::Authorization => "You do not have permission to access this page.",
            _ => err.public_message(),
        };

        (status, Html(views::error::render(heading, detail))).into_response()
    }
}
