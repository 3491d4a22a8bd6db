//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};

use vidhub_auth::AuthenticatedSession;
use vidhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Resolved from the session cookie once per request and passed into
/// service methods so that every operation knows *who* is acting and from
/// *which* session.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The current session ID.
    pub session_id: i64,
    /// The user's role as currently stored.
    pub role: UserRole,
    /// The username.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, session_id: i64, role: UserRole, username: String) -> Self {
        Self {
            user_id,
            session_id,
            role,
            username,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&AuthenticatedSession> for RequestContext {
    fn from(auth: &AuthenticatedSession) -> Self {
        Self::new(
            auth.user.id,
            auth.session.id,
            auth.user.role,
            auth.user.username.clone(),
        )
    }
}
