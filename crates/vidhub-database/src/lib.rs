//! # vidhub-database
//!
//! SQLite connection management, schema migrations and concrete repository
//! implementations for all VidHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
