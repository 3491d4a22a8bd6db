//! # vidhub-api
//!
//! HTTP layer for VidHub built on Axum.
//!
//! Serves the HTML pages (login, admin panel, library, password change),
//! the shared-secret bot API, the media files, and maps `AppError` onto
//! redirects, error pages and JSON bodies.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
mod views;

pub use app::{build_app, run_server};
pub use state::AppState;
