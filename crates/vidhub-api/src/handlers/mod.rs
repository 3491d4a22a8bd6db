//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod bot;
pub mod health;
pub mod password;
pub mod videos;
