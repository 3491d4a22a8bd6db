//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret expected from the provisioning bot.
    /// When unset, the bot endpoint rejects every request.
    #[serde(default)]
    pub bot_secret: Option<String>,
    /// Request header carrying the bot secret.
    #[serde(default = "default_bot_header")]
    pub bot_secret_header: String,
    /// Username of the administrator created on first boot.
    #[serde(default = "default_admin_username")]
    pub bootstrap_admin_username: String,
    /// Password of the bootstrap administrator. Generated when unset.
    #[serde(default)]
    pub bootstrap_admin_password: Option<String>,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bot_secret: None,
            bot_secret_header: default_bot_header(),
            bootstrap_admin_username: default_admin_username(),
            bootstrap_admin_password: None,
            password_min_length: default_password_min(),
        }
    }
}

fn default_bot_header() -> String {
    "x-bot-secret".to_string()
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_password_min() -> usize {
    1
}
