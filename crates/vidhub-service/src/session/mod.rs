//! Login, logout and per-request session resolution.

pub mod service;

pub use service::{LandingPage, LoginOutcome, SessionService};
