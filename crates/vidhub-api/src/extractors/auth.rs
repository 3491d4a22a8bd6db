//! Session extractors: resolve the session cookie into a `RequestContext`.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use vidhub_core::error::{AppError, ErrorKind};
use vidhub_service::context::RequestContext;

use crate::error::PageError;
use crate::state::AppState;
use crate::views::Nav;

/// Read the raw session token from the request cookies.
pub fn session_token(headers: &HeaderMap, state: &AppState) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(&state.config.session.cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

async fn resolve(parts: &Parts, state: &AppState) -> Result<RequestContext, AppError> {
    let token = session_token(&parts.headers, state)
        .ok_or_else(|| AppError::authentication("No session cookie"))?;
    state.session_service.authenticate(&token).await
}

/// Any signed-in user. Without a valid session the browser is sent to `/`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl CurrentUser {
    /// Navigation bar data for this user.
    pub(crate) fn nav(&self) -> Nav<'_> {
        Nav {
            username: &self.0.username,
            is_admin: self.0.is_admin(),
        }
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = PageError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve(parts, state).await?))
    }
}

/// A signed-in admin. Other signed-in users get a 403 page.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl std::ops::Deref for AdminUser {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = PageError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::warn!(user_id = user.user_id, path = %parts.uri.path(), "Admin route denied");
            return Err(AppError::authorization("Admin role required").into());
        }
        Ok(Self(user))
    }
}

/// The signed-in user, if there is one.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = PageError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve(parts, state).await {
            Ok(ctx) => Ok(Self(Some(ctx))),
            Err(e) if e.kind == ErrorKind::Authentication => Ok(Self(None)),
            Err(e) => Err(e.into()),
        }
    }
}
