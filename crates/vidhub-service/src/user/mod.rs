//! Self-service and admin user management services.

pub mod admin;
pub mod service;

pub use admin::{AdminUserService, CreateUserRequest};
pub use service::UserService;
