//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the cookie is marked `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookie: bool,
    /// Idle timeout in minutes before a session is discarded.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Absolute session timeout in hours (regardless of activity).
    #[serde(default = "default_absolute_timeout")]
    pub absolute_timeout_hours: u64,
    /// Interval for expired session cleanup in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
            idle_timeout_minutes: default_idle_timeout(),
            absolute_timeout_hours: default_absolute_timeout(),
            cleanup_interval_minutes: default_cleanup_interval(),
        }
    }
}

fn default_cookie_name() -> String {
    "vidhub_session".to_string()
}

fn default_idle_timeout() -> u64 {
    120
}

fn default_absolute_timeout() -> u64 {
    24
}

fn default_cleanup_interval() -> u64 {
    15
}
