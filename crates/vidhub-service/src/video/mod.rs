//! Video metadata services.

pub mod service;

pub use service::{CreateVideoRequest, VideoService, parse_folder_id, validate_filename};
