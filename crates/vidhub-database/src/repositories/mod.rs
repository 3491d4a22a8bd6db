//! Repository implementations for all VidHub entities.

pub mod folder;
pub mod session;
pub mod user;
pub mod video;

pub use folder::FolderRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
pub use video::VideoRepository;
