//! Session gate for routes that are not ordinary handlers (the media files).

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::extractors::CurrentUser;

/// Lets the request through only with a valid session; otherwise the
/// `CurrentUser` rejection redirects to the login page.
pub async fn require_session(user: CurrentUser, request: Request, next: Next) -> Response {
    tracing::debug!(user_id = user.user_id, path = %request.uri().path(), "Media request");
    next.run(request).await
}
