//! # vidhub-auth
//!
//! Authentication and authorization for VidHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and the minimal length policy
//! - `token`: Opaque session token generation and hashing
//! - `secret`: Constant-time shared-secret verification for the bot API
//! - `session`: Session lifecycle (login, validate, logout, revoke, cleanup)
//! - `rbac`: Role checks for admin-only operations

pub mod password;
pub mod rbac;
pub mod secret;
pub mod session;
pub mod token;

pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RbacEnforcer;
pub use secret::SharedSecret;
pub use session::{AuthenticatedSession, LoginResult, SessionCleanup, SessionManager, SessionStore};
