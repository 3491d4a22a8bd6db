//! Auth handlers: login page, login, logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use vidhub_core::config::SessionConfig;
use vidhub_core::error::ErrorKind;
use vidhub_service::LandingPage;

use crate::dto::request::LoginForm;
use crate::error::PageError;
use crate::extractors::{MaybeUser, ValidForm};
use crate::state::AppState;
use crate::views;

/// Build the session cookie carrying a freshly issued token.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .path("/")
        .build()
}

/// GET /
pub async fn login_page(MaybeUser(user): MaybeUser) -> Response {
    match user {
        Some(ctx) => Redirect::to(LandingPage::for_role(ctx.role).path()).into_response(),
        None => Html(views::login::render(None)).into_response(),
    }
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidForm(form): ValidForm<LoginForm>,
) -> Result<Response, PageError> {
    match state
        .session_service
        .login(&form.username, &form.password)
        .await
    {
        Ok(outcome) => {
            let jar = jar.add(session_cookie(&state.config.session, outcome.token));
            Ok((jar, Redirect::to(outcome.landing.path())).into_response())
        }
        Err(e) if e.kind == ErrorKind::InvalidCredentials => Ok((
            StatusCode::UNAUTHORIZED,
            Html(views::login::render(Some(e.public_message()))),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), PageError> {
    let cookie_name = state.config.session.cookie_name.clone();
    let token = jar.get(&cookie_name).map(|c| c.value().to_string());
    state.session_service.logout(token.as_deref()).await?;

    let jar = jar.remove(Cookie::build((cookie_name, "")).path("/"));
    Ok((jar, Redirect::to("/")))
}
