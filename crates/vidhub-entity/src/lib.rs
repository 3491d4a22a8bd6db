//! # vidhub-entity
//!
//! Domain entity models for VidHub. Every struct in this crate represents a
//! database table row or a domain value object. Database entities derive
//! `sqlx::FromRow`.

pub mod folder;
pub mod session;
pub mod user;
pub mod video;
