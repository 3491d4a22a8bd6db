//! Browser session flows on top of the auth crate's session manager.

use std::sync::Arc;

use vidhub_auth::SessionManager;
use vidhub_core::error::AppError;
use vidhub_entity::user::UserRole;

use crate::context::RequestContext;

/// Where a user lands after logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingPage {
    /// The admin dashboard.
    Admin,
    /// The video library.
    Videos,
}

impl LandingPage {
    /// Landing page for a role.
    pub fn for_role(role: UserRole) -> Self {
        if role.is_admin() {
            Self::Admin
        } else {
            Self::Videos
        }
    }

    /// Path to redirect to.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Videos => "/videos",
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Raw session token to place in the cookie.
    pub token: String,
    /// Where to send the browser next.
    pub landing: LandingPage,
}

/// Login, logout and session resolution for the web front-end.
#[derive(Debug, Clone)]
pub struct SessionService {
    /// Session lifecycle manager.
    manager: Arc<SessionManager>,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self { manager }
    }

    /// Authenticate with username and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let result = self.manager.login(username, password).await?;
        Ok(LoginOutcome {
            token: result.token,
            landing: LandingPage::for_role(result.user.role),
        })
    }

    /// Destroy the session behind a token, if any.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), AppError> {
        match token {
            Some(token) => self.manager.logout(token).await,
            None => Ok(()),
        }
    }

    /// Resolve a cookie token to the request context.
    pub async fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        let auth = self.manager.validate(token).await?;
        Ok(RequestContext::from(&auth))
    }
}
