//! Session lifecycle management: login, validation, logout, revocation and cleanup.

pub mod cleanup;
pub mod manager;
pub mod store;

pub use cleanup::SessionCleanup;
pub use manager::{AuthenticatedSession, LoginResult, SessionManager};
pub use store::SessionStore;
