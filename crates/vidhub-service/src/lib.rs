//! # vidhub-service
//!
//! Business logic service layer for VidHub. Each service orchestrates
//! repositories and the auth primitives to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod bootstrap;
pub mod context;
pub mod dashboard;
pub mod folder;
pub mod session;
pub mod user;
pub mod video;

#[cfg(test)]
pub(crate) mod test_support;

pub use bootstrap::BootstrapService;
pub use context::RequestContext;
pub use dashboard::{AdminDashboard, DashboardService, Library};
pub use folder::{FolderListing, FolderService};
pub use session::{LandingPage, LoginOutcome, SessionService};
pub use user::{AdminUserService, UserService};
pub use video::VideoService;
