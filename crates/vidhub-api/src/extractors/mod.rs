//! Custom Axum extractors.

pub mod auth;
pub mod bot;
pub mod form;
pub mod path;

pub use auth::{AdminUser, CurrentUser, MaybeUser};
pub use bot::BotAuth;
pub use form::{ValidForm, ValidJson};
pub use path::parse_id;
